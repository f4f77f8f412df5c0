//! Image preprocessing before OCR
//!
//! Every image is reduced to single-channel luma before recognition; colour
//! information is always discarded.

use crate::error::{ExamOcrError, Result};
use image::{DynamicImage, GrayImage, Luma};
use std::path::Path;
use tracing::debug;

/// Open an image file and convert it to 8-bit grayscale
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|source| ExamOcrError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {:?}: {}x{} {:?}", path, img.width(), img.height(), img.color());

    Ok(to_grayscale(&img))
}

/// Convert to 8-bit luma with ITU-R 601 weights (0.299, 0.587, 0.114).
/// Alpha is ignored.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        // Fixed-point weights scaled by 2^16, rounded
        let luma = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        Luma([luma as u8])
    })
}
