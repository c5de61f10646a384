use std::path::Path;

use image::{ImageResult, imageops::FilterType};
use log::debug;

/// Decodes `path` and scales it to exactly `width` x `height` RGBA8 pixels.
///
/// Bilinear scaling keeps thresholded output close to what a browser
/// canvas produces for the same picture.
pub fn load_rgba(path: &Path, width: u32, height: u32) -> ImageResult<Vec<u8>> {
    let img = image::open(path)?;
    debug!(
        "import: decoded path={} size={}x{} target={}x{}",
        path.display(),
        img.width(),
        img.height(),
        width,
        height
    );

    let resized = img.resize_exact(width, height, FilterType::Triangle);
    Ok(resized.to_rgba8().into_raw())
}
