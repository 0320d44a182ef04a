/// Native adapters - implementations for native Rust (non-WASM).

pub mod console_logger;
pub mod env_csrf;
pub mod reqwest_http;

pub use console_logger::ConsoleLogger;
pub use env_csrf::EnvCsrfToken;
pub use reqwest_http::ReqwestHttp;
