/// Target-independent adapters.

pub mod csrf;
pub mod memory_item;

pub use csrf::{FnCsrfToken, StaticCsrfToken};
pub use memory_item::InMemoryUploadItem;
