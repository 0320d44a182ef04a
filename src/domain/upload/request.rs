use super::types::UploadResult;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Single-use notification sent to the backend once a transfer completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    target: String,
    result: UploadResult,
    csrf_token: String,
}

impl NotificationRequest {
    pub fn new(target: impl Into<String>, result: UploadResult, csrf_token: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            result,
            csrf_token: csrf_token.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn result(&self) -> &UploadResult {
        &self.result
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn fields(&self) -> [(&'static str, &str); 3] {
        self.result.form_fields()
    }

    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE),
            (CSRF_HEADER, self.csrf_token.as_str()),
        ]
    }

    pub fn into_result(self) -> UploadResult {
        self.result
    }
}
