use crate::config::NotifierConfig;
use crate::domain::upload::NotifyError;
use crate::ports::CsrfTokenPort;

/// Reads the token from a DOM attribute each time it is needed.
#[derive(Debug, Clone)]
pub struct DomCsrfToken {
    element_id: String,
    attribute: String,
}

impl DomCsrfToken {
    pub fn new(element_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            attribute: attribute.into(),
        }
    }

    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(&config.csrf_element_id, &config.csrf_attribute)
    }
}

impl CsrfTokenPort for DomCsrfToken {
    fn token(&self) -> Result<String, NotifyError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| NotifyError::token_unavailable("no document available"))?;

        let element = document.get_element_by_id(&self.element_id).ok_or_else(|| {
            NotifyError::token_unavailable(format!("no element with id '{}'", self.element_id))
        })?;

        element.get_attribute(&self.attribute).ok_or_else(|| {
            NotifyError::token_unavailable(format!(
                "#{} has no {} attribute",
                self.element_id, self.attribute
            ))
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reads_rotated_token() {
        let document = web_sys::window().unwrap().document().unwrap();
        let form = document.create_element("form").unwrap();
        form.set_id("csrf-test-form");
        form.set_attribute("data-csrf-token", "first").unwrap();
        document.body().unwrap().append_child(&form).unwrap();

        let provider = DomCsrfToken::new("csrf-test-form", "data-csrf-token");
        assert_eq!(provider.token().unwrap(), "first");

        form.set_attribute("data-csrf-token", "second").unwrap();
        assert_eq!(provider.token().unwrap(), "second");

        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_element_is_unavailable() {
        let provider = DomCsrfToken::new("does-not-exist", "data-csrf-token");
        assert!(matches!(
            provider.token(),
            Err(NotifyError::TokenUnavailable(_))
        ));
    }
}
