#![cfg_attr(not(test), no_std)]

//! Editor model for OLED menus and bitmap screens, and their C export.

extern crate alloc;

pub mod export;
pub mod font;
pub mod input;
pub mod menu;
pub mod project;
pub mod screen;

use core::fmt;

pub use oled_bitmap::{PixelGrid, WordWidth};

/// Editor operation errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditorError {
    /// A fixed-capacity list or string is full.
    CapacityExceeded,
    /// No menu item at this index.
    NoSuchItem(usize),
    /// No screen at this index.
    NoSuchScreen(usize),
    /// Bitmap-level failure.
    Bitmap(oled_bitmap::Error),
}

impl From<oled_bitmap::Error> for EditorError {
    fn from(err: oled_bitmap::Error) -> Self {
        Self::Bitmap(err)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::NoSuchItem(index) => write!(f, "no menu item at index {index}"),
            Self::NoSuchScreen(index) => write!(f, "no screen at index {index}"),
            Self::Bitmap(err) => write!(f, "bitmap: {err}"),
        }
    }
}

impl core::error::Error for EditorError {}
