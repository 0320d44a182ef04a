/// The widget instance that owns the items being notified.
pub trait WidgetEventPort {
    /// Emits the widget's `error` event for one item with the backend's response body.
    fn emit_error(&self, item_id: &str, message: &str);
}
