/// Native Rust facade for upload notifications
/// Provides an ergonomic Rust API that delegates to domain logic
use crate::config::{NotifierConfig, ENDPOINT_ENV};
use crate::domain::upload::{operations, Acknowledgement, NotifyError};
use crate::platform::Platform;
use crate::ports::{UploadItemPort, WidgetEventPort};
use env_logger::Env;

/// Installs `env_logger` as the `log` backend. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}

/// Notifies one backend endpoint of completed uploads.
#[derive(Clone)]
pub struct UploadNotifier {
    platform: Platform,
    target: String,
}

impl UploadNotifier {
    pub fn new(platform: Platform, target: impl Into<String>) -> Self {
        Self {
            platform,
            target: target.into(),
        }
    }

    /// Builds a notifier with the default native adapters for `config.endpoint`.
    pub fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let target = config
            .endpoint
            .clone()
            .ok_or_else(|| NotifyError::invalid_options(format!("{ENDPOINT_ENV} is not set")))?;
        Ok(Self::new(Platform::new(), target))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Notify the backend that `item` finished its transfer
    pub async fn notify(
        &self,
        item: &dyn UploadItemPort,
        widget: &dyn WidgetEventPort,
    ) -> Result<Acknowledgement, NotifyError> {
        operations::notify_upload_complete(&self.platform, &self.target, item, widget).await
    }

    /// Notify the backend from a `success_action_redirect` query string
    pub async fn notify_redirect(&self, query: &str) -> Result<Acknowledgement, NotifyError> {
        operations::notify_redirect_complete(&self.platform, &self.target, query).await
    }
}
