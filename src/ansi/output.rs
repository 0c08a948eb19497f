//! Buffered ANSI output writer with state tracking.

use crate::ansi::{self, ColorMode};
use crate::cell::{Cell, CellContent};
use crate::color::Rgba;
use crate::style::TextAttributes;
use crate::surface::Surface;
use std::io::{self, Write};

/// Buffered writer that tracks ANSI state to minimize escape sequences.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,

    color_mode: ColorMode,

    // Current state for delta encoding
    current_fg: Option<Rgba>,
    current_bg: Option<Rgba>,
    current_attrs: TextAttributes,

    cursor_row: u32,
    cursor_col: u32,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::TrueColor)
    }

    /// Create a new ANSI writer with specified color mode.
    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            color_mode,
            current_fg: None,
            current_bg: None,
            current_attrs: TextAttributes::empty(),
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// Get the current color output mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Reset all state tracking.
    pub fn reset_state(&mut self) {
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to position, using relative moves if more efficient.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        if row == self.cursor_row && col == self.cursor_col {
            return;
        }

        let dy = row as i32 - self.cursor_row as i32;
        let dx = col as i32 - self.cursor_col as i32;

        // ESC[r;cH costs 4 bytes plus the digits
        let abs_cost = 4 + digits(row + 1) + digits(col + 1);
        let rel_cost = if dy == 0 { 0 } else { 3 + digits(dy.unsigned_abs()) }
            + if dx == 0 { 0 } else { 3 + digits(dx.unsigned_abs()) };

        if rel_cost < abs_cost {
            let _ = ansi::write_cursor_move(&mut self.buffer, dx, dy);
        } else {
            let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        }

        self.cursor_row = row;
        self.cursor_col = col;
    }

    /// Move cursor with an absolute sequence regardless of tracked state.
    pub fn position_cursor(&mut self, row: u32, col: u32) {
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        self.cursor_row = row;
        self.cursor_col = col;
    }

    /// Set foreground color if different from current.
    pub fn set_fg(&mut self, color: Rgba) {
        if self.current_fg != Some(color) {
            let _ = ansi::write_fg_color_with_mode(&mut self.buffer, color, self.color_mode);
            self.current_fg = Some(color);
        }
    }

    /// Set background color if different from current.
    pub fn set_bg(&mut self, color: Rgba) {
        if self.current_bg != Some(color) {
            let _ = ansi::write_bg_color_with_mode(&mut self.buffer, color, self.color_mode);
            self.current_bg = Some(color);
        }
    }

    /// Set text attributes, only writing changes.
    pub fn set_attributes(&mut self, attrs: TextAttributes) {
        if self.current_attrs == attrs {
            return;
        }

        let removed = self.current_attrs - attrs;
        if !removed.is_empty() {
            let mut codes: Vec<&str> = Vec::new();
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                codes.push("22");
            }
            if removed.contains(TextAttributes::ITALIC) {
                codes.push("23");
            }
            if removed.contains(TextAttributes::UNDERLINE) {
                codes.push("24");
            }
            if removed.contains(TextAttributes::INVERSE) {
                codes.push("27");
            }
            if removed.contains(TextAttributes::STRIKETHROUGH) {
                codes.push("29");
            }
            self.buffer.extend_from_slice(b"\x1b[");
            self.buffer.extend_from_slice(codes.join(";").as_bytes());
            self.buffer.push(b'm');

            // 22 clears both bold and dim
            self.current_attrs -= removed;
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                self.current_attrs -= TextAttributes::BOLD | TextAttributes::DIM;
            }
        }

        let to_add = attrs - self.current_attrs;
        if !to_add.is_empty() {
            let _ = ansi::write_attributes(&mut self.buffer, to_add);
        }

        self.current_attrs = attrs;
    }

    /// Write a cell at the current cursor position.
    ///
    /// Continuation cells produce no output; the wide glyph before them
    /// already covered their column.
    pub fn write_cell(&mut self, cell: &Cell) {
        if cell.is_continuation() {
            return;
        }

        self.set_attributes(cell.attributes);
        self.set_fg(cell.fg);
        self.set_bg(cell.bg);

        match &cell.content {
            CellContent::Char(c) => {
                let mut buf = [0u8; 4];
                self.buffer.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            CellContent::Grapheme(grapheme) => {
                self.buffer.extend_from_slice(grapheme.as_bytes());
            }
            CellContent::Empty | CellContent::Continuation => {
                self.buffer.push(b' ');
            }
        }

        self.cursor_col += cell.display_width().max(1) as u32;
    }

    /// Write a cell at a specific position.
    pub fn write_cell_at(&mut self, row: u32, col: u32, cell: &Cell) {
        self.move_cursor(row, col);
        self.write_cell(cell);
    }

    /// Write every row of `surface` with its top-left corner at (`row`, `col`).
    ///
    /// Each row starts with an absolute cursor position, and attributes are
    /// reset once the surface is written.
    pub fn present(&mut self, surface: &Surface, row: u32, col: u32) {
        for (y, cells) in surface.rows().enumerate() {
            self.position_cursor(row + y as u32, col);
            for cell in cells {
                self.write_cell(cell);
            }
        }
        self.reset();
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Get a reference to the buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer without flushing.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}

/// Count decimal digits in a number.
fn digits(n: u32) -> usize {
    if n == 0 { 1 } else { (n.ilog10() + 1) as usize }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_write_str() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_str("Floods");
        assert_eq!(writer.buffer(), b"Floods");
    }

    #[test]
    fn test_cursor_movement_prefers_shorter_sequence() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.move_cursor(0, 1);
        assert_eq!(writer.buffer(), b"\x1b[1C");

        writer.clear_buffer();
        writer.move_cursor(0, 1);
        assert!(writer.buffer().is_empty());

        writer.move_cursor(3, 1);
        assert_eq!(writer.buffer(), b"\x1b[3B");

        writer.clear_buffer();
        writer.move_cursor(40, 100);
        assert_eq!(writer.buffer(), b"\x1b[41;101H");

        writer.clear_buffer();
        writer.move_cursor(0, 0);
        assert_eq!(writer.buffer(), b"\x1b[1;1H");
    }

    #[test]
    fn test_color_caching() {
        let mut writer = AnsiWriter::new(Vec::new());

        writer.set_fg(Rgba::RED);
        let len1 = writer.buffer().len();
        writer.set_fg(Rgba::RED);
        assert_eq!(writer.buffer().len(), len1);

        writer.set_fg(Rgba::ORANGE);
        assert!(writer.buffer().len() > len1);
    }

    #[test]
    fn test_attribute_delta() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_attributes(TextAttributes::BOLD | TextAttributes::UNDERLINE);
        assert_eq!(writer.buffer(), b"\x1b[1;4m");

        writer.clear_buffer();
        writer.set_attributes(TextAttributes::UNDERLINE);
        assert_eq!(writer.buffer(), b"\x1b[22m");

        writer.clear_buffer();
        writer.set_attributes(TextAttributes::DIM);
        assert_eq!(writer.buffer(), b"\x1b[24m\x1b[2m");
    }

    #[test]
    fn test_write_cell() {
        let mut writer = AnsiWriter::with_color_mode(Vec::new(), ColorMode::NoColor);
        writer.write_cell(&Cell::new('A', Style::NONE));
        assert_eq!(writer.buffer(), b"A");

        writer.clear_buffer();
        writer.write_cell(&Cell::from_grapheme("🌊", Style::NONE));
        assert_eq!(writer.buffer(), "🌊".as_bytes());

        writer.clear_buffer();
        writer.write_cell(&Cell::continuation(Rgba::TRANSPARENT));
        assert!(writer.buffer().is_empty());
    }

    #[test]
    fn test_present_positions_each_row() {
        let mut surface = Surface::new(3, 2);
        surface.draw_text(0, 0, "ab", Style::NONE);
        surface.draw_text(0, 1, "cd", Style::NONE);

        let mut writer = AnsiWriter::with_color_mode(Vec::new(), ColorMode::NoColor);
        writer.present(&surface, 2, 4);
        assert_eq!(writer.buffer(), b"\x1b[3;5Hab \x1b[4;5Hcd \x1b[0m");
    }

    #[test]
    fn test_flush_drains_buffer() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_str("x");
        writer.flush().unwrap();
        assert!(writer.buffer().is_empty());
        assert_eq!(writer.into_inner(), b"x");
    }
}
