use super::notifier::UploadNotifier;
use crate::adapters::shared::InMemoryUploadItem;
use crate::domain::upload::{Acknowledgement, NotifyError};
use crate::domain::widget::{validate_options, WidgetErrorEvent, WidgetOptions};
use crate::ports::{UploadItemPort, WidgetEventPort};
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;

type ErrorListener = Box<dyn Fn(&WidgetErrorEvent) + Send + Sync>;

/// In-memory model of one upload widget instance.
///
/// Owns its items and is the target of the `error` events raised for them.
pub struct UploadWidget {
    options: WidgetOptions,
    items: Mutex<Vec<Arc<InMemoryUploadItem>>>,
    errors: Mutex<Vec<WidgetErrorEvent>>,
    listeners: Mutex<Vec<ErrorListener>>,
}

impl UploadWidget {
    pub fn new(options: WidgetOptions) -> Result<Self, NotifyError> {
        validate_options(&options)?;
        Ok(Self {
            options,
            items: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn add_file(&self, id: impl Into<String>) -> Arc<InMemoryUploadItem> {
        let item = Arc::new(InMemoryUploadItem::new(id));
        self.items.lock().push(item.clone());
        item
    }

    pub fn item(&self, id: &str) -> Option<Arc<InMemoryUploadItem>> {
        self.items.lock().iter().find(|item| item.id() == id).cloned()
    }

    pub fn items(&self) -> Vec<Arc<InMemoryUploadItem>> {
        self.items.lock().clone()
    }

    /// Subscribes to the widget's `error` event.
    ///
    /// Listeners run while the listener list is locked and must not subscribe
    /// from inside the callback.
    pub fn on_error(&self, listener: impl Fn(&WidgetErrorEvent) + Send + Sync + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    pub fn errors(&self) -> Vec<WidgetErrorEvent> {
        self.errors.lock().clone()
    }

    /// Runs the `success` handler for every transferred item it has not run for yet.
    ///
    /// Each item is notified at most once, including across overlapping calls
    /// and after a transport failure. At most `parallelUploads` notifications
    /// are in flight at once; results come back in completion order.
    pub async fn notify_completed(
        &self,
        notifier: &UploadNotifier,
    ) -> Vec<(String, Result<Acknowledgement, NotifyError>)> {
        let ready: Vec<_> = self
            .items()
            .into_iter()
            .filter(|item| item.claim_for_notification())
            .collect();

        stream::iter(ready)
            .map(|item| async move {
                let result = notifier.notify(item.as_ref(), self).await;
                (item.id(), result)
            })
            .buffer_unordered(self.options.parallel_uploads)
            .collect()
            .await
    }
}

impl WidgetEventPort for UploadWidget {
    fn emit_error(&self, item_id: &str, message: &str) {
        let event = WidgetErrorEvent {
            item_id: item_id.to_string(),
            message: message.to_string(),
        };
        for listener in self.listeners.lock().iter() {
            listener(&event);
        }
        self.errors.lock().push(event);
    }
}
