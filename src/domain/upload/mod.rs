pub mod error;
pub mod extraction;
pub mod operations;
pub mod request;
pub mod types;

pub use error::NotifyError;
pub use extraction::{parse_post_response, parse_redirect_query};
pub use operations::{notify_redirect_complete, notify_upload_complete};
pub use request::NotificationRequest;
pub use types::{Acknowledgement, FileVisualState, HttpReply, UploadResult};
