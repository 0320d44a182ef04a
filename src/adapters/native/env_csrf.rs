use crate::config::CSRF_TOKEN_ENV;
use crate::domain::upload::NotifyError;
use crate::ports::CsrfTokenPort;
use std::env;

/// Reads the token from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvCsrfToken {
    variable: String,
}

impl EnvCsrfToken {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvCsrfToken {
    fn default() -> Self {
        Self::new(CSRF_TOKEN_ENV)
    }
}

impl CsrfTokenPort for EnvCsrfToken {
    fn token(&self) -> Result<String, NotifyError> {
        match env::var(&self.variable) {
            Ok(token) if !token.is_empty() => Ok(token),
            Ok(_) => Err(NotifyError::token_unavailable(format!(
                "{} is empty",
                self.variable
            ))),
            Err(_) => Err(NotifyError::token_unavailable(format!(
                "{} is not set",
                self.variable
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_fresh_value() {
        let provider = EnvCsrfToken::new("S3UPLOAD_TEST_TOKEN_ROTATION");
        env::set_var("S3UPLOAD_TEST_TOKEN_ROTATION", "first");
        assert_eq!(provider.token().unwrap(), "first");
        env::set_var("S3UPLOAD_TEST_TOKEN_ROTATION", "second");
        assert_eq!(provider.token().unwrap(), "second");
        env::remove_var("S3UPLOAD_TEST_TOKEN_ROTATION");
    }

    #[test]
    fn test_unset_variable_is_unavailable() {
        let provider = EnvCsrfToken::new("S3UPLOAD_TEST_TOKEN_NEVER_SET");
        let err = provider.token().unwrap_err();
        assert_eq!(
            err,
            NotifyError::token_unavailable("S3UPLOAD_TEST_TOKEN_NEVER_SET is not set")
        );
    }
}
