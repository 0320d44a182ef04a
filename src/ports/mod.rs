/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The domain layer only talks to the page, the backend and the upload widget
/// through these traits; adapters provide the browser and native implementations.

pub mod csrf;
pub mod http;
pub mod logger;
pub mod upload_item;
pub mod widget;

pub use csrf::CsrfTokenPort;
pub use http::HttpPort;
pub use logger::LoggerPort;
pub use upload_item::UploadItemPort;
pub use widget::WidgetEventPort;
