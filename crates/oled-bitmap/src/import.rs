//! Image-to-grid thresholding.

use log::debug;

use crate::{Error, PixelGrid};

/// Gray level at or below which a pixel is lit.
pub const LIT_THRESHOLD: u16 = 128;

/// Returns `true` when the gray average `(r + g + b) / 3` is at most 128.
///
/// Compared on the channel sum so no rounding is involved.
#[inline]
pub const fn is_lit(r: u8, g: u8, b: u8) -> bool {
    (r as u16 + g as u16 + b as u16) <= LIT_THRESHOLD * 3
}

/// Like [`is_lit`], with fully transparent pixels read as black.
#[inline]
pub const fn is_lit_rgba(r: u8, g: u8, b: u8, a: u8) -> bool {
    a == 0 || is_lit(r, g, b)
}

impl PixelGrid {
    /// Replaces the grid contents with a thresholded RGBA8 image.
    ///
    /// The source is sampled nearest-neighbour onto the grid, so callers
    /// wanting smoother scaling should resize to the grid size first.
    pub fn import_rgba(
        &mut self,
        rgba: &[u8],
        src_width: usize,
        src_height: usize,
    ) -> Result<(), Error> {
        if src_width == 0 || src_height == 0 {
            return Err(Error::InvalidImage);
        }
        let expected = src_width
            .checked_mul(src_height)
            .and_then(|px| px.checked_mul(4))
            .ok_or(Error::InvalidImage)?;
        if rgba.len() != expected {
            return Err(Error::InvalidImage);
        }

        let (width, height) = (self.width(), self.height());
        for y in 0..height {
            let sy = y * src_height / height;
            for x in 0..width {
                let sx = x * src_width / width;
                let i = (sy * src_width + sx) * 4;
                let on = is_lit_rgba(rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]);
                self.set_pixel(x, y, on);
            }
        }

        debug!(
            "bitmap: imported {}x{} image into {}x{} grid, {} lit",
            src_width,
            src_height,
            width,
            height,
            self.lit_count()
        );
        Ok(())
    }
}
