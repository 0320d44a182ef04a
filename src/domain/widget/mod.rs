pub mod options;
pub mod types;
pub mod validation;

pub use options::{WidgetOptions, DEFAULT_PARALLEL_UPLOADS};
pub use types::{WidgetErrorEvent, ERROR_EVENT, SUCCESS_EVENT, WIDGET_ELEMENT_ID};
pub use validation::validate_options;
