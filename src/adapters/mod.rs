/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;

pub use global_logger::logger;

use crate::ports::{CsrfTokenPort, HttpPort};
use std::sync::Arc;

/// Token adapter used by `Platform::new` on this target.
pub fn default_csrf() -> Arc<dyn CsrfTokenPort> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(wasm::DomCsrfToken::from_config(&crate::config::CONFIG))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(native::EnvCsrfToken::default())
    }
}

/// HTTP adapter used by `Platform::new` on this target.
pub fn default_http() -> Arc<dyn HttpPort> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(wasm::FetchHttp::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(native::ReqwestHttp::new())
    }
}
