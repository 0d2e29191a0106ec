//! Raster image <-> byte conversion.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use ts_core::{Error, Result};

/// Serialize `image` as PNG. Lossless for every color type PNG can carry.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::codec(format!("Failed to encode image as PNG: {e}")))?;

    let bytes = buf.into_inner();
    tracing::trace!(
        width = image.width(),
        height = image.height(),
        bytes = bytes.len(),
        "Encoded PNG"
    );
    Ok(bytes)
}

/// Decode image bytes, sniffing the container format.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(Error::codec("image data is empty"));
    }
    image::load_from_memory(bytes).map_err(|e| Error::codec(format!("Failed to decode image: {e}")))
}

/// Scale `image` to fit a `dimension` x `dimension` frame, keeping its aspect
/// ratio. Images that already fit are returned unchanged.
pub fn thumbnail(image: &DynamicImage, dimension: u32) -> Result<DynamicImage> {
    if dimension == 0 {
        return Err(Error::InvalidInput("thumbnail dimension must be positive".into()));
    }
    if image.width() <= dimension && image.height() <= dimension {
        return Ok(image.clone());
    }
    Ok(image.resize(dimension, dimension, FilterType::Triangle))
}
