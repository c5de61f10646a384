#![cfg_attr(not(test), no_std)]

//! Monochrome bitmap packing for embedded C export.
//!
//! A [`PixelGrid`] is packed row by row into fixed-width words
//! ([`WordWidth`]), most significant bit first, and rendered as C array
//! declarations with [`Declaration`].

extern crate alloc;

pub mod declaration;
mod grid;
mod import;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use declaration::{Declaration, format_declaration, format_extern, sanitize_name};
pub use grid::PixelGrid;
pub use import::{is_lit, is_lit_rgba};

use core::{fmt, str::FromStr};

use alloc::vec::Vec;
use log::debug;

/// Width of one packed word.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WordWidth {
    /// 8-bit words, exported as `uint8_t`.
    #[default]
    U8,
    /// 16-bit words, exported as `uint16_t`.
    U16,
}

impl WordWidth {
    /// Number of pixels carried by one word.
    pub const fn bits(self) -> usize {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
        }
    }

    /// Largest value a word of this width can hold.
    pub const fn max_value(self) -> u16 {
        match self {
            Self::U8 => u8::MAX as u16,
            Self::U16 => u16::MAX,
        }
    }

    /// C type keyword used in exported declarations.
    pub const fn c_type(self) -> &'static str {
        match self {
            Self::U8 => "uint8_t",
            Self::U16 => "uint16_t",
        }
    }

    /// Number of words one row of `row_width` pixels packs into.
    pub const fn words_per_row(self, row_width: usize) -> usize {
        row_width.div_ceil(self.bits())
    }
}

impl TryFrom<u32> for WordWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::U8),
            16 => Ok(Self::U16),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

impl FromStr for WordWidth {
    type Err = Error;

    /// Accepts the C type token (`uint8_t`, `uint16_t`) or the bit count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "uint8_t" | "8" => Ok(Self::U8),
            "uint16_t" | "16" => Ok(Self::U16),
            other => match other.parse::<u32>() {
                Ok(bits) => Err(Error::UnsupportedWidth(bits)),
                Err(_) => Err(Error::UnknownWidthName),
            },
        }
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// Packing errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A row's length differs from the grid width.
    InvalidGrid { row: usize, expected: usize, actual: usize },
    /// Only 8 and 16 bit words are supported.
    UnsupportedWidth(u32),
    /// Width token is neither a known C type nor a bit count.
    UnknownWidthName,
    /// Word sequence length does not match the requested dimensions.
    WordCount { expected: usize, actual: usize },
    /// A word does not fit the selected width.
    WordOutOfRange { index: usize, value: u16 },
    /// Source image buffer does not match its declared dimensions.
    InvalidImage,
    /// Grid storage for these dimensions overflows or cannot be allocated.
    GridTooLarge { width: usize, height: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::UnsupportedWidth(bits) => {
                write!(f, "unsupported word width {bits}, expected 8 or 16")
            }
            Self::WordCount { expected, actual } => {
                write!(f, "expected {expected} packed words, got {actual}")
            }
            Self::WordOutOfRange { index, value } => {
                write!(f, "word {index} ({value}) exceeds the selected width")
            }
            Self::UnknownWidthName => {
                f.write_str("unknown word width, expected uint8_t, uint16_t, 8 or 16")
            }
            Self::InvalidImage => f.write_str("image buffer does not match its dimensions"),
            Self::GridTooLarge { width, height } => {
                write!(f, "grid of {width}x{height} pixels is too large")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Packs `grid` row-major into words of `width` bits.
///
/// Each row is packed on its own: the last word of a row whose width is not
/// a multiple of `width` is zero-padded in its low bits.
pub fn pack(grid: &PixelGrid, width: WordWidth) -> Vec<u16> {
    let bits = width.bits();
    let per_row = width.words_per_row(grid.width());
    let mut words = Vec::with_capacity(grid.height() * per_row);

    for y in 0..grid.height() {
        for chunk in 0..per_row {
            let start = chunk * bits;
            let mut word = 0u16;
            for b in 0..bits {
                if grid.pixel(start + b, y) == Some(true) {
                    word |= 1 << (bits - 1 - b);
                }
            }
            words.push(word);
        }
    }

    debug!(
        "bitmap: packed {}x{} grid into {} {} words",
        grid.width(),
        grid.height(),
        words.len(),
        width
    );
    words
}

/// Validates raw rows and packs them.
///
/// The first row sets the expected width; any non-zero cell is lit.
pub fn pack_rows<R: AsRef<[u8]>>(rows: &[R], width: WordWidth) -> Result<Vec<u16>, Error> {
    let grid = PixelGrid::from_rows(rows)?;
    Ok(pack(&grid, width))
}

/// Rebuilds a `width_px` x `height` grid from packed words.
///
/// Padding bits past the last column of each row are discarded.
pub fn unpack(
    words: &[u16],
    width: WordWidth,
    height: usize,
    width_px: usize,
) -> Result<PixelGrid, Error> {
    let bits = width.bits();
    let per_row = width.words_per_row(width_px);
    let expected = height
        .checked_mul(per_row)
        .ok_or(Error::GridTooLarge {
            width: width_px,
            height,
        })?;
    if words.len() != expected {
        return Err(Error::WordCount {
            expected,
            actual: words.len(),
        });
    }

    if let Some((index, &value)) = words
        .iter()
        .enumerate()
        .find(|(_, word)| **word > width.max_value())
    {
        return Err(Error::WordOutOfRange { index, value });
    }

    let mut grid = PixelGrid::try_new(width_px, height)?;
    for (i, word) in words.iter().enumerate() {
        let y = i / per_row;
        let start = (i % per_row) * bits;
        for b in 0..bits {
            let x = start + b;
            if x >= width_px {
                break;
            }
            if word & (1 << (bits - 1 - b)) != 0 {
                grid.set_pixel(x, y, true);
            }
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&[u8]]) -> PixelGrid {
        PixelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn leftmost_pixel_lands_in_most_significant_bit() {
        let grid = grid_from(&[&[1, 0, 1, 1, 0, 0, 0, 0]]);
        assert_eq!(pack(&grid, WordWidth::U8), [0b1011_0000]);
        assert_eq!(pack(&grid, WordWidth::U8), [176]);
    }

    #[test]
    fn partial_chunk_is_padded_low() {
        let grid = grid_from(&[&[1; 10]]);
        assert_eq!(pack(&grid, WordWidth::U8), [255, 192]);
        assert_eq!(pack(&grid, WordWidth::U16), [0b1111_1111_1100_0000]);
    }

    #[test]
    fn rows_never_share_a_word() {
        // Two 4-pixel rows stay in separate words even though they'd fit in one.
        let grid = grid_from(&[&[1, 1, 1, 1], &[0, 0, 0, 1]]);
        assert_eq!(pack(&grid, WordWidth::U8), [0xF0, 0x10]);
    }

    #[test]
    fn packed_length_is_rows_times_chunks() {
        for (w, h) in [(0, 0), (0, 3), (5, 0), (1, 1), (7, 2), (8, 2), (9, 3), (128, 64)] {
            let grid = PixelGrid::new(w, h);
            assert_eq!(pack(&grid, WordWidth::U8).len(), h * w.div_ceil(8));
            assert_eq!(pack(&grid, WordWidth::U16).len(), h * w.div_ceil(16));
        }
    }

    #[test]
    fn sixteen_bit_words_span_two_bytes_of_pixels() {
        let mut row = [0u8; 16];
        row[0] = 1;
        row[8] = 1;
        row[15] = 1;
        let grid = grid_from(&[&row]);
        assert_eq!(pack(&grid, WordWidth::U16), [0x8081]);
    }

    #[test]
    fn unpack_restores_packed_grid() {
        let mut grid = PixelGrid::new(32, 5);
        for (x, y) in [(0, 0), (31, 0), (7, 2), (8, 2), (16, 4), (15, 3)] {
            grid.set_pixel(x, y, true);
        }

        for width in [WordWidth::U8, WordWidth::U16] {
            let words = pack(&grid, width);
            assert_eq!(unpack(&words, width, 5, 32).unwrap(), grid);
        }
    }

    #[test]
    fn unpack_drops_padding_bits() {
        let grid = unpack(&[0xFF, 0xFF], WordWidth::U8, 1, 10).unwrap();
        assert_eq!(grid, grid_from(&[&[1; 10]]));
    }

    #[test]
    fn unpack_rejects_wrong_word_count() {
        assert_eq!(
            unpack(&[0, 0, 0], WordWidth::U8, 2, 10),
            Err(Error::WordCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn unpack_rejects_word_wider_than_width() {
        assert_eq!(
            unpack(&[0x100], WordWidth::U8, 1, 8),
            Err(Error::WordOutOfRange {
                index: 0,
                value: 0x100
            })
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: [&[u8]; 2] = [&[1, 0, 1], &[1, 0]];
        assert_eq!(
            pack_rows(&rows, WordWidth::U8),
            Err(Error::InvalidGrid {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn width_parsing_accepts_c_types_and_bit_counts() {
        assert_eq!("uint8_t".parse::<WordWidth>(), Ok(WordWidth::U8));
        assert_eq!("16".parse::<WordWidth>(), Ok(WordWidth::U16));
        assert_eq!(
            "uint32_t".parse::<WordWidth>(),
            Err(Error::UnknownWidthName)
        );
        assert_eq!("32".parse::<WordWidth>(), Err(Error::UnsupportedWidth(32)));
        assert_eq!(WordWidth::try_from(32), Err(Error::UnsupportedWidth(32)));
        assert_eq!(WordWidth::try_from(16), Ok(WordWidth::U16));
    }

    #[test]
    fn unknown_width_name_lists_accepted_tokens() {
        let err = "uint32_t".parse::<WordWidth>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "unknown word width, expected uint8_t, uint16_t, 8 or 16"
        );
    }

    #[test]
    fn pack_rows_lights_any_non_zero_cell() {
        let rows: [&[u8]; 1] = [&[2, 0, 0, 0, 0, 0, 0, 255]];

        assert_eq!(pack_rows(&rows, WordWidth::U8), Ok(vec![0b1000_0001]));
    }

    #[test]
    fn unpack_rejects_overflowing_dimensions() {
        assert_eq!(
            unpack(&[], WordWidth::U16, usize::MAX, 32),
            Err(Error::GridTooLarge {
                width: 32,
                height: usize::MAX
            })
        );
    }
}
