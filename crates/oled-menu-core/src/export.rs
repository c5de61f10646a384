//! C source generation for menus and screens.

use core::fmt::{self, Write};

use log::debug;
use oled_bitmap::{Declaration, WordWidth, pack};

use crate::{menu::MenuItem, screen::Screen};

/// Target display library of the generated code.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExportFormat {
    #[default]
    U8g2,
}

impl ExportFormat {
    pub const fn library_name(self) -> &'static str {
        match self {
            Self::U8g2 => "u8g2",
        }
    }
}

/// Export settings shared by every generated file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Word width used for every screen array.
    pub word_width: WordWidth,
}

/// Writes `label` as a C string body, escaping double quotes.
fn write_c_string<W: Write>(out: &mut W, label: &str) -> fmt::Result {
    for c in label.chars() {
        if c == '"' {
            out.write_str("\\\"")?;
        } else {
            out.write_char(c)?;
        }
    }
    Ok(())
}

fn write_screen_definitions<W: Write>(
    out: &mut W,
    screens: &[Screen],
    width: WordWidth,
) -> fmt::Result {
    for screen in screens {
        let words = pack(&screen.grid, width);
        debug!(
            "export: screen name={:?} words={} type={}",
            screen.name.as_str(),
            words.len(),
            width
        );
        writeln!(out, "// Screen: {}", screen.name)?;
        writeln!(out, "{}", Declaration::new(&screen.name, &words, width))?;
    }
    Ok(())
}

/// Full listing: menu labels, menu length, then every screen array.
pub fn write_listing<W: Write>(
    out: &mut W,
    items: &[MenuItem],
    screens: &[Screen],
    config: &ExportConfig,
) -> fmt::Result {
    let library = config.format.library_name();
    writeln!(out, "// OLED Menu Code ({library})")?;
    out.write_str("const char* menuItems[] = {\n")?;
    for item in items {
        out.write_str("  \"")?;
        write_c_string(out, &item.label)?;
        out.write_str("\",\n")?;
    }
    out.write_str("};\n")?;
    writeln!(out, "const uint8_t menuLength = {};", items.len())?;
    write_screen_definitions(out, screens, config.word_width)?;
    writeln!(
        out,
        "\n// Add your menu and screen rendering logic here using {library}"
    )
}

/// Contents of `screens.c`.
pub fn write_source<W: Write>(
    out: &mut W,
    screens: &[Screen],
    config: &ExportConfig,
) -> fmt::Result {
    write_screen_definitions(out, screens, config.word_width)
}

/// Contents of `screens.h`.
pub fn write_header<W: Write>(
    out: &mut W,
    screens: &[Screen],
    config: &ExportConfig,
) -> fmt::Result {
    let width = config.word_width;
    for screen in screens {
        let len = width.words_per_row(screen.grid.width()) * screen.grid.height();
        writeln!(out, "{}", Declaration::external(&screen.name, len, width))?;
    }
    Ok(())
}
