//! In-memory monochrome pixel grid.

use alloc::{vec, vec::Vec};

use crate::Error;

/// 1bpp pixel grid of arbitrary size.
///
/// Rows are stored byte-aligned. Bit mapping within one row byte: bit 7 is
/// the leftmost pixel in that byte; bits past the last column stay clear.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    row_bytes: usize,
    bytes: Vec<u8>,
}

impl PixelGrid {
    /// Creates an unlit `width` x `height` grid.
    ///
    /// # Panics
    ///
    /// Panics if the storage size overflows `usize` or cannot be allocated.
    /// Use [`PixelGrid::try_new`] for sizes that come from user input.
    pub fn new(width: usize, height: usize) -> Self {
        let row_bytes = width.div_ceil(8);
        Self {
            width,
            height,
            row_bytes,
            bytes: vec![0u8; row_bytes.saturating_mul(height)],
        }
    }

    /// Fallible [`PixelGrid::new`].
    ///
    /// Fails with [`Error::GridTooLarge`] when the storage size overflows or
    /// the allocation is refused.
    pub fn try_new(width: usize, height: usize) -> Result<Self, Error> {
        let too_large = Error::GridTooLarge { width, height };
        let row_bytes = width.div_ceil(8);
        let len = row_bytes.checked_mul(height).ok_or(too_large)?;

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).map_err(|_| too_large)?;
        bytes.resize(len, 0);

        Ok(Self {
            width,
            height,
            row_bytes,
            bytes,
        })
    }

    /// Builds a grid from one slice per row. Any non-zero cell is lit.
    ///
    /// Fails when a row's length differs from the first row's.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(width, rows.len());

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::InvalidGrid {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    grid.set_pixel(x, y, true);
                }
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the underlying row-aligned bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Clears every pixel.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Sets every pixel to `on`, keeping padding bits clear.
    pub fn fill(&mut self, on: bool) {
        if !on {
            self.bytes.fill(0x00);
            return;
        }

        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, true);
            }
        }
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        let Some((index, mask)) = self.locate(x, y) else {
            return false;
        };

        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (index, mask) = self.locate(x, y)?;
        Some((self.bytes[index] & mask) != 0)
    }

    /// Flips a pixel.
    ///
    /// Returns the new state, or `None` when out of bounds.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<bool> {
        let (index, mask) = self.locate(x, y)?;
        self.bytes[index] ^= mask;
        Some((self.bytes[index] & mask) != 0)
    }

    /// Returns one row as `0`/`1` cells.
    pub fn row(&self, y: usize) -> Option<Vec<u8>> {
        if y >= self.height {
            return None;
        }

        Some(
            (0..self.width)
                .map(|x| self.pixel(x, y).map_or(0, u8::from))
                .collect(),
        )
    }

    fn locate(&self, x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y * self.row_bytes + x / 8, 1u8 << (7 - (x % 8))))
    }
}
