use crate::domain::upload::{HttpReply, NotificationRequest, NotifyError};
use crate::ports::HttpPort;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;

/// Native HTTP adapter backed by `reqwest`.
///
/// No request timeout is configured: a backend that never answers leaves the
/// notification pending, as in the browser.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpPort for ReqwestHttp {
    async fn post_form(&self, request: &NotificationRequest) -> Result<HttpReply, NotifyError> {
        let form = request
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name, value.to_string())
            });

        let mut builder = self.client.post(request.target());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder
            .multipart(form)
            .send()
            .await
            .map_err(|e| NotifyError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::transport(format!("failed to read response body: {e}")))?;

        Ok(HttpReply { status, body })
    }
}
