use crate::domain::upload::NotifyError;
use crate::ports::CsrfTokenPort;

/// Token fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticCsrfToken {
    token: String,
}

impl StaticCsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CsrfTokenPort for StaticCsrfToken {
    fn token(&self) -> Result<String, NotifyError> {
        if self.token.is_empty() {
            return Err(NotifyError::token_unavailable("token is empty"));
        }
        Ok(self.token.clone())
    }
}

/// Token produced by a closure on every call.
pub struct FnCsrfToken<F> {
    provider: F,
}

impl<F> FnCsrfToken<F>
where
    F: Fn() -> Result<String, NotifyError> + Send + Sync,
{
    pub fn new(provider: F) -> Self {
        Self { provider }
    }
}

impl<F> CsrfTokenPort for FnCsrfToken<F>
where
    F: Fn() -> Result<String, NotifyError> + Send + Sync,
{
    fn token(&self) -> Result<String, NotifyError> {
        (self.provider)()
    }
}
