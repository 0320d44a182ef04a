/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod dom_csrf;
pub mod dropzone;
pub mod error_conversions;
pub mod fetch_http;

pub use console_logger::ConsoleLogger;
pub use dom_csrf::DomCsrfToken;
pub use dropzone::{DropzoneFile, DropzoneFileEvents, DropzoneInstance};
pub use fetch_http::FetchHttp;
