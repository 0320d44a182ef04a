use crate::domain::upload::NotifyError;

/// Source of the anti-forgery token sent with every notification.
///
/// Queried once per notification and never cached, so a token rotated
/// between two uploads is picked up by the second one.
pub trait CsrfTokenPort: Send + Sync {
    fn token(&self) -> Result<String, NotifyError>;
}
