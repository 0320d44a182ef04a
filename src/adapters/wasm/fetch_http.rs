use super::error_conversions::js_transport;
use crate::domain::upload::{HttpReply, NotificationRequest, NotifyError};
use crate::ports::HttpPort;
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, Response};

/// Browser HTTP adapter using `fetch` with same-origin credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttp;

impl FetchHttp {
    pub fn new() -> Self {
        Self
    }

    fn build_request(request: &NotificationRequest) -> Result<Request, JsValue> {
        let form = FormData::new()?;
        for (name, value) in request.fields() {
            form.append_with_str(name, value)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_credentials(RequestCredentials::SameOrigin);
        init.set_body(&JsValue::from(form));

        let fetch_request = Request::new_with_str_and_init(request.target(), &init)?;
        let headers = fetch_request.headers();
        for (name, value) in request.headers() {
            headers.set(name, value)?;
        }
        Ok(fetch_request)
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    async fn post_form(&self, request: &NotificationRequest) -> Result<HttpReply, NotifyError> {
        let window =
            web_sys::window().ok_or_else(|| NotifyError::transport("no window available"))?;
        let fetch_request = Self::build_request(request).map_err(js_transport)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_transport)?
            .dyn_into()
            .map_err(js_transport)?;

        let body = JsFuture::from(response.text().map_err(js_transport)?)
            .await
            .map_err(js_transport)?;

        Ok(HttpReply {
            status: response.status(),
            body: body.as_string().unwrap_or_default(),
        })
    }
}
