#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod config;

// Re-exports for testing
pub use domain::upload::{
    Acknowledgement, FileVisualState, HttpReply, NotificationRequest, NotifyError, UploadResult,
};
pub use domain::widget::{WidgetErrorEvent, WidgetOptions};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
