use serde::{Deserialize, Serialize};

pub const DEFAULT_PARALLEL_UPLOADS: usize = 5;

/// Options handed to the upload widget.
///
/// Size caps are in megabytes and disabled unless set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub parallel_uploads: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_filesize: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_thumbnail_filesize: Option<f64>,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            parallel_uploads: DEFAULT_PARALLEL_UPLOADS,
            max_filesize: None,
            max_thumbnail_filesize: None,
        }
    }
}

impl WidgetOptions {
    pub fn with_parallel_uploads(mut self, parallel_uploads: usize) -> Self {
        self.parallel_uploads = parallel_uploads;
        self
    }

    pub fn with_max_filesize(mut self, megabytes: f64) -> Self {
        self.max_filesize = Some(megabytes);
        self
    }

    pub fn with_max_thumbnail_filesize(mut self, megabytes: f64) -> Self {
        self.max_thumbnail_filesize = Some(megabytes);
        self
    }
}
