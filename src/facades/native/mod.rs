pub mod notifier;
pub mod widget;

pub use notifier::{init_logging, UploadNotifier};
pub use widget::UploadWidget;
