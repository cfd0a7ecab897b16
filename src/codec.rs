//! Image codec abstraction.
//!
//! The optimizer only needs three capabilities from an image library: read
//! the pixel dimensions, shrink, and encode to WebP. [`ImageCodec`] captures
//! them so the traversal and statistics logic can run against a fake codec in
//! tests, while [`WebpCodec`] is the production implementation backed by the
//! `image` and `webp` crates.

use crate::error::{OptimizeError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

pub trait ImageCodec {
    /// Reads `(width, height)` from the image header without decoding pixels.
    fn read_dimensions(&self, input: &Path) -> Result<(u32, u32)>;

    /// Decodes `input`, resizes it to exactly `resize_to` when given, and
    /// returns the encoded WebP bytes.
    fn transcode(&self, input: &Path, resize_to: Option<(u32, u32)>, quality: u8)
        -> Result<Vec<u8>>;
}

/// Lossy WebP encoder over libwebp, resizing with Lanczos3.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for WebpCodec {
    fn read_dimensions(&self, input: &Path) -> Result<(u32, u32)> {
        let dimensions = ImageReader::open(input)?
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(dimensions)
    }

    fn transcode(
        &self,
        input: &Path,
        resize_to: Option<(u32, u32)>,
        quality: u8,
    ) -> Result<Vec<u8>> {
        let mut img = ImageReader::open(input)?.with_guessed_format()?.decode()?;

        if let Some((width, height)) = resize_to {
            img = img.resize_exact(width, height, FilterType::Lanczos3);
        }

        encode_webp(&img, quality)
    }
}

/// Encodes through libwebp's lossy path. Every pixel layout is widened to
/// RGBA8 first since libwebp only accepts 8-bit RGB(A). Images libwebp
/// rejects (e.g. a side over 16383 px) come back as `WebpEncoding`.
pub fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    if img.width() == 0 || img.height() == 0 {
        return Err(OptimizeError::WebpEncoding(format!(
            "cannot encode empty image ({}x{})",
            img.width(),
            img.height()
        )));
    }

    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    let memory = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|e| OptimizeError::WebpEncoding(format!("{:?}", e)))?;
    Ok(memory.to_vec())
}
