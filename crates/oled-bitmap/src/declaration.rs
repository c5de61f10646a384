//! C source declarations for packed bitmaps.

use core::fmt::{self, Write};

use alloc::string::String;

use crate::WordWidth;

/// Replacement for characters that cannot appear in a C identifier.
pub const SANITIZE_REPLACEMENT: char = '_';

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Writes `name` with every character outside `[A-Za-z0-9_]` replaced by `_`.
pub fn write_sanitized<W: Write>(out: &mut W, name: &str) -> fmt::Result {
    for c in name.chars() {
        out.write_char(if is_identifier_char(c) {
            c
        } else {
            SANITIZE_REPLACEMENT
        })?;
    }
    Ok(())
}

/// Returns `name` as a C identifier. Applying it twice changes nothing.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    // Writing into a `String` cannot fail.
    let _ = write_sanitized(&mut out, name);
    out
}

#[derive(Clone, Copy, Debug)]
enum Body<'a> {
    Initialized(&'a [u16]),
    Extern(usize),
}

/// One exported array.
///
/// `Display` renders either
/// `<type> <name>[<N>] = {<w0>,<w1>,...};` or
/// `extern <type> <name>[<N>];`
/// without a trailing newline.
#[derive(Clone, Copy, Debug)]
pub struct Declaration<'a> {
    name: &'a str,
    width: WordWidth,
    body: Body<'a>,
}

impl<'a> Declaration<'a> {
    /// Definition with an initializer list.
    pub fn new(name: &'a str, words: &'a [u16], width: WordWidth) -> Self {
        Self {
            name,
            width,
            body: Body::Initialized(words),
        }
    }

    /// Header-style declaration for an array of `len` words.
    pub fn external(name: &'a str, len: usize, width: WordWidth) -> Self {
        Self {
            name,
            width,
            body: Body::Extern(len),
        }
    }

    /// Array length `N`.
    pub fn len(&self) -> usize {
        match self.body {
            Body::Initialized(words) => words.len(),
            Body::Extern(len) => len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self.body, Body::Extern(_)) {
            f.write_str("extern ")?;
        }
        write!(f, "{} ", self.width.c_type())?;
        write_sanitized(f, self.name)?;
        write!(f, "[{}]", self.len())?;

        match self.body {
            Body::Extern(_) => f.write_str(";"),
            Body::Initialized(words) => {
                f.write_str(" = {")?;
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{word}")?;
                }
                f.write_str("};")
            }
        }
    }
}

/// Renders `<type> <name>[<N>] = {...};`.
pub fn format_declaration(name: &str, words: &[u16], width: WordWidth) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", Declaration::new(name, words, width));
    out
}

/// Renders `extern <type> <name>[<N>];`.
pub fn format_extern(name: &str, len: usize, width: WordWidth) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", Declaration::external(name, len, width));
    out
}
