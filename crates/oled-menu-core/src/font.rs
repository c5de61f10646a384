//! u8g2 fonts selectable for menu items and screens.

use core::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MenuFont {
    #[default]
    NcenB14,
    Fixed6x10,
    CourB08,
    HelvB12,
}

impl MenuFont {
    pub const ALL: [Self; 4] = [Self::NcenB14, Self::Fixed6x10, Self::CourB08, Self::HelvB12];

    /// Font symbol as referenced from u8g2 code.
    pub const fn u8g2_name(self) -> &'static str {
        match self {
            Self::NcenB14 => "u8g2_font_ncenB14_tr",
            Self::Fixed6x10 => "u8g2_font_6x10_tr",
            Self::CourB08 => "u8g2_font_courB08_tr",
            Self::HelvB12 => "u8g2_font_helvB12_tr",
        }
    }

    /// Short name shown in font pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NcenB14 => "ncenB14",
            Self::Fixed6x10 => "6x10",
            Self::CourB08 => "courB08",
            Self::HelvB12 => "helvB12",
        }
    }
}

/// Unknown font name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownFont;

impl fmt::Display for UnknownFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown u8g2 font")
    }
}

impl core::error::Error for UnknownFont {}

impl FromStr for MenuFont {
    type Err = UnknownFont;

    /// Accepts either the u8g2 symbol or the short label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|font| font.u8g2_name() == s || font.label() == s)
            .ok_or(UnknownFont)
    }
}

impl fmt::Display for MenuFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.u8g2_name())
    }
}
