pub mod converters;
pub mod dropzone;
