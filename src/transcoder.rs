use crate::codec::ImageCodec;
use crate::constants::OUTPUT_EXTENSION;
use crate::error::{OptimizeError, Result};
use crate::options::OptimizeOptions;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of converting one image.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub optimized_size: u64,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
}

impl ConversionResult {
    /// Size reduction in percent, rounded to one decimal place. Negative when
    /// the output grew. `None` for a zero-byte original.
    pub fn savings_percent(&self) -> Option<f64> {
        savings_percent(self.original_size, self.optimized_size)
    }

    pub fn was_resized(&self) -> bool {
        self.original_dimensions != self.output_dimensions
    }
}

pub fn savings_percent(original_size: u64, optimized_size: u64) -> Option<f64> {
    if original_size == 0 {
        return None;
    }
    let ratio = (original_size as f64 - optimized_size as f64) / original_size as f64 * 100.0;
    Some((ratio * 10.0).round() / 10.0)
}

/// Shrink-only target for an image of `width`x`height` bounded by
/// `max_width`. Returns `None` when the image already fits. Only the width is
/// bounded; the height follows the aspect ratio.
pub fn fit_within_width(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width || max_width == 0 {
        return None;
    }
    let scaled = (u64::from(height) * u64::from(max_width) + u64::from(width) / 2) / u64::from(width);
    let new_height = u32::try_from(scaled).unwrap_or(u32::MAX).max(1);
    Some((max_width, new_height))
}

/// `<dir>/<stem>.webp` next to the input.
pub fn output_path_for(input: &Path) -> Result<PathBuf> {
    if input.file_stem().is_none() {
        return Err(OptimizeError::InvalidFileName(input.to_path_buf()));
    }
    Ok(input.with_extension(OUTPUT_EXTENSION))
}

/// Converts a single image to WebP next to the original:
/// size -> dimensions -> resize decision -> encode -> write -> size.
///
/// # Arguments
/// * `codec` - Decoder/encoder used for the pixel work
/// * `input` - Source image path
/// * `options` - Quality and maximum width for the run
///
/// # Returns
/// * `Ok(ConversionResult)` with both file sizes
/// * `Err(OptimizeError)` if any step fails; the existing output (if any) is
///   left untouched
pub fn convert_image<C: ImageCodec + ?Sized>(
    codec: &C,
    input: &Path,
    options: &OptimizeOptions,
) -> Result<ConversionResult> {
    let original_size = fs::metadata(input)?.len();
    let (width, height) = codec.read_dimensions(input)?;

    let resize_to = fit_within_width(width, height, options.max_width);
    if let Some((w, h)) = resize_to {
        crate::verbose!("Resizing {}x{} -> {}x{}", width, height, w, h);
    }

    let encoded = codec.transcode(input, resize_to, options.quality)?;

    let output = output_path_for(input)?;
    write_replacing(&output, &encoded)?;
    let optimized_size = fs::metadata(&output)?.len();

    Ok(ConversionResult {
        input: input.to_path_buf(),
        output,
        original_size,
        optimized_size,
        original_dimensions: (width, height),
        output_dimensions: resize_to.unwrap_or((width, height)),
    })
}

/// Writes through a sibling temp file and renames it over `path`, so an
/// interrupted write never leaves a truncated output behind.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| OptimizeError::Io(e.error))?;
    Ok(())
}
