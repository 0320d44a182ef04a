use super::converters;
use crate::adapters::wasm::error_conversions::js_transport;
use crate::adapters::wasm::{DropzoneFile, DropzoneInstance};
use crate::config::CONFIG;
use crate::domain::upload::{operations, parse_post_response, Acknowledgement, NotifyError};
use crate::domain::widget::{validate_options, WidgetOptions, SUCCESS_EVENT};
use crate::platform::Platform;
use js_sys::{Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CONNECTION_ERROR_MESSAGE: &str = "Connection error";

/// Options object for the widget (`parallelUploads` and any size caps).
///
/// Wire it up from the page:
/// `Dropzone.options.s3upload = Object.assign(dropzone_options(), { init() { attach_notifier(this); } });`
#[wasm_bindgen]
pub fn dropzone_options() -> Result<JsValue, JsValue> {
    let options = WidgetOptions::default().with_parallel_uploads(CONFIG.parallel_uploads);
    validate_options(&options).map_err(converters::to_js_error)?;
    converters::to_js_value(&options)
}

/// Registers the completion notifier as the widget's `success` handler.
#[wasm_bindgen]
pub fn attach_notifier(dropzone: JsValue) -> Result<(), JsValue> {
    let on: Function = Reflect::get(&dropzone, &JsValue::from_str("on"))?.dyn_into()?;
    let widget = Rc::new(DropzoneInstance::new(dropzone.clone()));

    let handler = Closure::<dyn FnMut(JsValue)>::new(move |file: JsValue| {
        let widget = widget.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = notify_file(&widget, file).await;
        });
    });

    on.call2(
        &dropzone,
        &JsValue::from_str(SUCCESS_EVENT),
        handler.as_ref().unchecked_ref(),
    )?;
    // Lives as long as the widget does.
    handler.forget();
    Ok(())
}

/// Notifies the backend for one file of `dropzone` and resolves to the acknowledgement.
#[wasm_bindgen]
pub async fn notify_upload(dropzone: JsValue, file: JsValue) -> Result<JsValue, JsValue> {
    let widget = DropzoneInstance::new(dropzone);
    let ack = notify_file(&widget, file).await?;
    converters::to_js_value(&ack)
}

/// Notifies the backend of a redirect-style upload.
///
/// Uses the current page's query string when `query` is omitted.
#[wasm_bindgen]
pub async fn notify_redirect(query: Option<String>) -> Result<JsValue, JsValue> {
    let platform = Platform::new();
    let target = converters::current_location()?;
    let query = match query {
        Some(query) => query,
        None => web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window available"))?
            .location()
            .search()?,
    };

    let outcome = operations::notify_redirect_complete(&platform, &target, &query).await;
    if let Err(e) = &outcome {
        present_failure(e);
    }
    converters::to_js_value(&outcome?)
}

/// Parses an S3 `PostResponse` document into `{ bucket, key, etag }`.
#[wasm_bindgen]
pub fn parse_upload_response(document: &str) -> Result<JsValue, JsValue> {
    let result = parse_post_response(document)?;
    converters::to_js_value(&result)
}

async fn notify_file(
    widget: &DropzoneInstance,
    file: JsValue,
) -> Result<Acknowledgement, NotifyError> {
    let platform = Platform::new();
    let target = converters::current_location().map_err(js_transport)?;
    let item = DropzoneFile::new(file);

    let events = widget.for_file(&item);
    let outcome = operations::notify_upload_complete(&platform, &target, &item, &events).await;
    if let Err(e) = &outcome {
        present_failure(e);
    }
    outcome
}

/// Rejections already reached the widget through its `error` event; other
/// failures were logged by the domain. Only a lost connection is shown.
fn present_failure(error: &NotifyError) {
    if error.is_connection_error() {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(CONNECTION_ERROR_MESSAGE);
        }
    }
}
