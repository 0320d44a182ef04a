use super::options::WidgetOptions;
use crate::domain::upload::NotifyError;

fn validate_size_cap(value: Option<f64>, name: &str) -> Result<(), NotifyError> {
    match value {
        Some(megabytes) if !megabytes.is_finite() || megabytes <= 0.0 => Err(
            NotifyError::invalid_options(format!("{name} must be a positive number of megabytes")),
        ),
        _ => Ok(()),
    }
}

pub fn validate_options(options: &WidgetOptions) -> Result<(), NotifyError> {
    if options.parallel_uploads == 0 {
        return Err(NotifyError::invalid_options(
            "parallelUploads must be at least 1",
        ));
    }
    validate_size_cap(options.max_filesize, "maxFilesize")?;
    validate_size_cap(options.max_thumbnail_filesize, "maxThumbnailFilesize")
}
