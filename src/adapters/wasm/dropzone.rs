use crate::adapters::logger;
use crate::domain::upload::FileVisualState;
use crate::domain::widget::ERROR_EVENT;
use crate::ports::{UploadItemPort, WidgetEventPort};
use js_sys::{Function, Reflect};
use std::cell::Cell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

const SUCCESS_CLASS: &str = "dz-success";

fn get(target: &JsValue, property: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(property))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Identifier of a dropzone file: `file.upload.uuid`, else `file.name`.
pub fn file_id(file: &JsValue) -> String {
    get(file, "upload")
        .and_then(|upload| get(&upload, "uuid"))
        .and_then(|uuid| uuid.as_string())
        .or_else(|| get(file, "name").and_then(|name| name.as_string()))
        .unwrap_or_default()
}

/// One file object handed to the widget's `success` handler.
pub struct DropzoneFile {
    file: JsValue,
    id: String,
    state: Cell<FileVisualState>,
}

impl DropzoneFile {
    pub fn new(file: JsValue) -> Self {
        let id = file_id(&file);
        Self {
            file,
            id,
            state: Cell::new(FileVisualState::Pending),
        }
    }

    fn preview_element(&self) -> Option<Element> {
        get(&self.file, "previewElement").and_then(|el| el.dyn_into::<Element>().ok())
    }

    pub fn as_js(&self) -> &JsValue {
        &self.file
    }
}

impl UploadItemPort for DropzoneFile {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn response_document(&self) -> Option<String> {
        get(&self.file, "xhr")
            .and_then(|xhr| get(&xhr, "responseText"))
            .and_then(|text| text.as_string())
    }

    fn visual_state(&self) -> FileVisualState {
        self.state.get()
    }

    fn clear_success_marker(&self) {
        if let Some(preview) = self.preview_element() {
            let _ = preview.class_list().remove_1(SUCCESS_CLASS);
        }
    }

    fn set_visual_state(&self, next: FileVisualState) {
        if !self.state.get().can_transition_to(next) {
            return;
        }
        self.state.set(next);

        if next.is_terminal() {
            let _ = Reflect::set(
                &self.file,
                &JsValue::from_str("status"),
                &JsValue::from_str(next.as_str()),
            );
        }
        if next == FileVisualState::Success {
            if let Some(preview) = self.preview_element() {
                let _ = preview.class_list().add_1(SUCCESS_CLASS);
            }
        }
    }
}

/// The dropzone instance owning the files.
#[derive(Clone)]
pub struct DropzoneInstance {
    dropzone: JsValue,
}

impl DropzoneInstance {
    pub fn new(dropzone: JsValue) -> Self {
        Self { dropzone }
    }

    pub fn as_js(&self) -> &JsValue {
        &self.dropzone
    }

    /// Event target for one file, emitting on that file object directly.
    pub fn for_file<'a>(&'a self, file: &'a DropzoneFile) -> DropzoneFileEvents<'a> {
        DropzoneFileEvents {
            instance: self,
            file,
        }
    }

    fn emit(&self, event: &str, file: &JsValue, message: &str) -> Result<(), JsValue> {
        let emit: Function = Reflect::get(&self.dropzone, &JsValue::from_str("emit"))?.dyn_into()?;
        emit.call3(
            &self.dropzone,
            &JsValue::from_str(event),
            file,
            &JsValue::from_str(message),
        )?;
        Ok(())
    }
}

/// `error` events for the file a notification was started for.
///
/// The file may have been removed from `dropzone.files`, or share its name
/// with another file, by the time the backend answers.
pub struct DropzoneFileEvents<'a> {
    instance: &'a DropzoneInstance,
    file: &'a DropzoneFile,
}

impl WidgetEventPort for DropzoneFileEvents<'_> {
    fn emit_error(&self, item_id: &str, message: &str) {
        if let Err(e) = self.instance.emit(ERROR_EVENT, self.file.as_js(), message) {
            logger().error(&format!(
                "Failed to emit '{ERROR_EVENT}' for '{item_id}': {e:?}"
            ));
        }
    }
}
