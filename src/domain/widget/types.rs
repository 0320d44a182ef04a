use serde::Serialize;

/// Id of the widget's form element; also carries the CSRF token attribute.
pub const WIDGET_ELEMENT_ID: &str = "s3upload";

/// Lifecycle event fired once per file after a successful storage transfer.
pub const SUCCESS_EVENT: &str = "success";

/// Event emitted on the widget when the backend rejects a notification.
pub const ERROR_EVENT: &str = "error";

/// Payload of the widget's `error` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetErrorEvent {
    pub item_id: String,
    pub message: String,
}
