/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Arc<dyn Trait>` (ref-counted, injected at construction)
///
/// The upload item and the owning widget are not part of the platform: they
/// are passed explicitly to each notification.
use crate::ports::{CsrfTokenPort, HttpPort, LoggerPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    csrf: Arc<dyn CsrfTokenPort>,
    http: Arc<dyn HttpPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    ///
    /// - WASM: token read from the page's `#s3upload[data-csrf-token]`, requests sent with `fetch`.
    /// - Native: token read from `S3UPLOAD_CSRF_TOKEN`, requests sent with `reqwest`.
    pub fn new() -> Self {
        Self::with_ports(
            crate::adapters::default_csrf(),
            crate::adapters::default_http(),
        )
    }

    /// Creates a Platform around explicit token and HTTP adapters.
    pub fn with_ports(csrf: Arc<dyn CsrfTokenPort>, http: Arc<dyn HttpPort>) -> Self {
        Self {
            logger: crate::adapters::logger(),
            csrf,
            http,
        }
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn csrf(&self) -> &dyn CsrfTokenPort {
        self.csrf.as_ref()
    }

    #[inline]
    pub fn http(&self) -> &dyn HttpPort {
        self.http.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
