pub mod upload;
pub mod widget;
