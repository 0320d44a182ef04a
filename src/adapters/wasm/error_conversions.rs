use crate::domain::upload::NotifyError;
use wasm_bindgen::JsValue;

/// Conversion from NotifyError to JsValue for the WASM boundary
impl From<NotifyError> for JsValue {
    fn from(error: NotifyError) -> Self {
        match error {
            NotifyError::Rejected { body, .. } => JsValue::from_str(&body),
            other => JsValue::from_str(&other.to_string()),
        }
    }
}

/// Maps a rejected browser promise or failed DOM call to a transport error.
pub fn js_transport(err: JsValue) -> NotifyError {
    NotifyError::transport(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}
