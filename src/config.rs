use crate::domain::widget::{DEFAULT_PARALLEL_UPLOADS, WIDGET_ELEMENT_ID};
use once_cell::sync::Lazy;
use std::env;

pub const ENDPOINT_ENV: &str = "S3UPLOAD_ENDPOINT";
pub const CSRF_TOKEN_ENV: &str = "S3UPLOAD_CSRF_TOKEN";
pub const PARALLEL_UPLOADS_ENV: &str = "S3UPLOAD_PARALLEL_UPLOADS";
pub const CSRF_ELEMENT_ID_ENV: &str = "S3UPLOAD_CSRF_ELEMENT_ID";
pub const CSRF_ATTRIBUTE_ENV: &str = "S3UPLOAD_CSRF_ATTRIBUTE";

pub const DEFAULT_CSRF_ATTRIBUTE: &str = "data-csrf-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Backend URL notified natively. The browser always posts to the current page.
    pub endpoint: Option<String>,
    pub csrf_element_id: String,
    pub csrf_attribute: String,
    pub parallel_uploads: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            csrf_element_id: WIDGET_ELEMENT_ID.to_string(),
            csrf_attribute: DEFAULT_CSRF_ATTRIBUTE.to_string(),
            parallel_uploads: DEFAULT_PARALLEL_UPLOADS,
        }
    }
}

impl NotifierConfig {
    /// Defaults overridden by `S3UPLOAD_*` variables (and a `.env` file natively).
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            endpoint: non_empty(ENDPOINT_ENV).or(defaults.endpoint),
            csrf_element_id: non_empty(CSRF_ELEMENT_ID_ENV).unwrap_or(defaults.csrf_element_id),
            csrf_attribute: non_empty(CSRF_ATTRIBUTE_ENV).unwrap_or(defaults.csrf_attribute),
            parallel_uploads: non_empty(PARALLEL_UPLOADS_ENV)
                .and_then(|value| value.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.parallel_uploads),
        }
    }
}

pub static CONFIG: Lazy<NotifierConfig> = Lazy::new(NotifierConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NotifierConfig::from_lookup(lookup(&[]));
        assert_eq!(config, NotifierConfig::default());
        assert_eq!(config.csrf_element_id, "s3upload");
        assert_eq!(config.csrf_attribute, "data-csrf-token");
        assert_eq!(config.parallel_uploads, 5);
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = NotifierConfig::from_lookup(lookup(&[
            (ENDPOINT_ENV, "https://example.test/upload/"),
            (PARALLEL_UPLOADS_ENV, " 3 "),
            (CSRF_ELEMENT_ID_ENV, "uploader"),
            (CSRF_ATTRIBUTE_ENV, "data-token"),
        ]));
        assert_eq!(config.endpoint.as_deref(), Some("https://example.test/upload/"));
        assert_eq!(config.parallel_uploads, 3);
        assert_eq!(config.csrf_element_id, "uploader");
        assert_eq!(config.csrf_attribute, "data-token");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = NotifierConfig::from_lookup(lookup(&[
            (ENDPOINT_ENV, "  "),
            (PARALLEL_UPLOADS_ENV, "0"),
        ]));
        assert!(config.endpoint.is_none());
        assert_eq!(config.parallel_uploads, 5);

        let config = NotifierConfig::from_lookup(lookup(&[(PARALLEL_UPLOADS_ENV, "many")]));
        assert_eq!(config.parallel_uploads, 5);
    }
}
