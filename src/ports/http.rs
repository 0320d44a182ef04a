use crate::domain::upload::{HttpReply, NotificationRequest, NotifyError};
use async_trait::async_trait;

/// Port for posting a notification to the backend.
///
/// Any completed response is `Ok`, whatever its status. `Err` is reserved for
/// requests that never completed and must be `NotifyError::Transport`.
#[async_trait(?Send)]
pub trait HttpPort: Send + Sync {
    async fn post_form(&self, request: &NotificationRequest) -> Result<HttpReply, NotifyError>;
}
