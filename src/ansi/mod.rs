//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Rgba;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Color output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette.
    Color256,
    /// No color output.
    NoColor,
}

impl ColorMode {
    /// Parse a command-line name (`truecolor`, `256`, `none`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "truecolor" | "24bit" => Some(Self::TrueColor),
            "256" => Some(Self::Color256),
            "none" | "off" => Some(Self::NoColor),
            _ => None,
        }
    }
}

/// Write a u8 as decimal digits without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// Write a u32 as decimal digits without formatting overhead.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    let mut buf = [0u8; 10];
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Which SGR color slot a sequence targets.
#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

fn write_color(w: &mut impl Write, color: Rgba, mode: ColorMode, layer: Layer) -> io::Result<()> {
    if color.is_transparent() {
        let reset = match layer {
            Layer::Foreground => sequences::color::FG_DEFAULT,
            Layer::Background => sequences::color::BG_DEFAULT,
        };
        return match mode {
            ColorMode::NoColor => Ok(()),
            _ => w.write_all(reset.as_bytes()),
        };
    }
    let base: u8 = match layer {
        Layer::Foreground => 38,
        Layer::Background => 48,
    };
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            w.write_all(b"\x1b[")?;
            write_u8_decimal(w, base)?;
            w.write_all(b";2;")?;
            write_u8_decimal(w, r)?;
            w.write_all(b";")?;
            write_u8_decimal(w, g)?;
            w.write_all(b";")?;
            write_u8_decimal(w, b)?;
            w.write_all(b"m")
        }
        ColorMode::Color256 => {
            w.write_all(b"\x1b[")?;
            write_u8_decimal(w, base)?;
            w.write_all(b";5;")?;
            write_u8_decimal(w, color.to_256_color())?;
            w.write_all(b"m")
        }
        ColorMode::NoColor => Ok(()),
    }
}

/// Write SGR sequence for a foreground color.
///
/// Transparent colors reset to the terminal default.
pub fn write_fg_color_with_mode(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, Layer::Foreground)
}

/// Write SGR sequence for a background color.
pub fn write_bg_color_with_mode(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, Layer::Background)
}

/// SGR sequence for a foreground color as a string.
#[must_use]
pub fn fg_color_with_mode(color: Rgba, mode: ColorMode) -> String {
    let mut buf = Vec::new();
    let _ = write_fg_color_with_mode(&mut buf, color, mode);
    String::from_utf8_lossy(&buf).into_owned()
}

/// SGR sequence for a background color as a string.
#[must_use]
pub fn bg_color_with_mode(color: Rgba, mode: ColorMode) -> String {
    let mut buf = Vec::new();
    let _ = write_bg_color_with_mode(&mut buf, color, mode);
    String::from_utf8_lossy(&buf).into_owned()
}

/// SGR codes that switch attributes on.
const ATTRIBUTE_ON: [(TextAttributes, &str); 6] = [
    (TextAttributes::BOLD, "1"),
    (TextAttributes::DIM, "2"),
    (TextAttributes::ITALIC, "3"),
    (TextAttributes::UNDERLINE, "4"),
    (TextAttributes::INVERSE, "7"),
    (TextAttributes::STRIKETHROUGH, "9"),
];

/// Write SGR sequence enabling `attrs`; writes nothing for no attributes.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    let mut first = true;
    for (flag, code) in ATTRIBUTE_ON {
        if !attrs.contains(flag) {
            continue;
        }
        w.write_all(if first { b"\x1b[" } else { b";" })?;
        w.write_all(code.as_bytes())?;
        first = false;
    }
    if first { Ok(()) } else { w.write_all(b"m") }
}

/// SGR sequence for text attributes as a string.
#[must_use]
pub fn attributes(attrs: TextAttributes) -> String {
    let mut buf = Vec::new();
    let _ = write_attributes(&mut buf, attrs);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write cursor position sequence (0-indexed input, 1-indexed output).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row + 1)?;
    w.write_all(b";")?;
    write_u32_decimal(w, col + 1)?;
    w.write_all(b"H")
}

/// Write relative cursor movement; a zero delta writes nothing.
pub fn write_cursor_move(w: &mut impl Write, dx: i32, dy: i32) -> io::Result<()> {
    if dy < 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dy.unsigned_abs())?;
        w.write_all(b"A")?;
    } else if dy > 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dy.unsigned_abs())?;
        w.write_all(b"B")?;
    }

    if dx > 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dx.unsigned_abs())?;
        w.write_all(b"C")?;
    } else if dx < 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dx.unsigned_abs())?;
        w.write_all(b"D")?;
    }
    Ok(())
}

/// Cursor position sequence as a string.
#[must_use]
pub fn cursor_position(row: u32, col: u32) -> String {
    let mut buf = Vec::new();
    let _ = write_cursor_position(&mut buf, row, col);
    String::from_utf8_lossy(&buf).into_owned()
}
