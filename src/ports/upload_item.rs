use crate::domain::upload::FileVisualState;

/// Handle to one item of the upload widget.
pub trait UploadItemPort {
    fn id(&self) -> String;

    /// Raw response document of the storage transfer, if one arrived.
    fn response_document(&self) -> Option<String>;

    fn visual_state(&self) -> FileVisualState;

    /// Removes the optimistic success marker the widget set after the transfer.
    fn clear_success_marker(&self);

    fn set_visual_state(&self, state: FileVisualState);
}
