use crate::constants::{
    DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, DEFAULT_THUMBNAIL_WIDTH, MAX_QUALITY, MIN_QUALITY,
    SUPPORTED_IMAGE_EXTENSIONS,
};
use crate::error::{OptimizeError, Result};
use std::path::PathBuf;

/// Settings for a single optimization run. Built once at start-up and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub input_dir: PathBuf,
    pub quality: u8,
    pub max_width: u32,
    /// Accepted for compatibility with existing invocations; no thumbnails are
    /// generated.
    pub thumbnail_width: u32,
    pub extensions: Vec<String>,
}

impl OptimizeOptions {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        quality: Option<u8>,
        max_width: Option<u32>,
        thumbnail_width: Option<u32>,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(OptimizeError::InvalidQuality(quality));
        }

        let max_width = max_width.unwrap_or(DEFAULT_MAX_WIDTH);
        if max_width == 0 {
            return Err(OptimizeError::InvalidMaxWidth(max_width));
        }

        Ok(Self {
            input_dir: input_dir.into(),
            quality,
            max_width,
            thumbnail_width: thumbnail_width.unwrap_or(DEFAULT_THUMBNAIL_WIDTH),
            extensions: SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        })
    }
}
