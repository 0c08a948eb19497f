//! Cell grid the control renders into.
//!
//! [`Surface`] is deliberately small: the control needs background fills,
//! styled text runs, single glyphs and clipping, nothing more. Coordinates
//! are signed so a segment scrolled partly off the left edge can be drawn
//! with its natural origin and clipped.
//!
//! ```
//! use segstrip::surface::{ClipRect, Surface};
//! use segstrip::{Rgba, Style};
//!
//! let mut surface = Surface::new(12, 1);
//! surface.push_clip(ClipRect::new(0, 0, 6, 1));
//! surface.draw_text(-2, 0, "Tornado", Style::fg(Rgba::BLACK));
//! surface.pop_clip();
//! assert_eq!(surface.row_text(0), "rnado");
//! ```

mod clip;

pub use clip::{ClipRect, ClipStack};

use crate::cell::{Cell, CellContent};
use crate::color::Rgba;
use crate::style::Style;
use crate::unicode::{grapheme_width, graphemes};

/// A 2D grid of [`Cell`]s with a clip stack.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    clip: ClipStack,
}

impl Surface {
    /// Create a surface of `width` x `height` transparent cells.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::clear(Rgba::TRANSPARENT); size],
            clip: ClipStack::default(),
        }
    }

    /// Surface dimensions.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Surface width in columns.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)
    }

    /// Get the cell at a position.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Replace the cell at a position, respecting the clip.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.clip.contains(x, y) {
            return;
        }
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Composite a cell over the existing one, respecting the clip.
    pub fn set_blended(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.clip.contains(x, y) {
            return;
        }
        if let Some(idx) = self.index(x, y) {
            let blended = cell.blend_over(&self.cells[idx]);
            self.cells[idx] = blended;
        }
    }

    /// Reset every cell to an empty cell with background `bg`.
    pub fn clear(&mut self, bg: Rgba) {
        self.cells.fill(Cell::clear(bg));
    }

    /// Fill a rectangle with empty cells of color `bg`, blended over what is there.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, bg: Rgba) {
        let area = self.clip.current().intersect(&ClipRect::new(x, y, width, height));
        for row in area.y..area.y.saturating_add_unsigned(area.height) {
            for col in area.x..area.x.saturating_add_unsigned(area.width) {
                if let Some(idx) = self.index(col, row) {
                    let under = self.cells[idx].bg;
                    self.cells[idx] = Cell::clear(bg.blend_over(under));
                }
            }
        }
    }

    /// Tint the background of a rectangle, keeping content and foreground.
    pub fn tint_rect(&mut self, x: i32, y: i32, width: u32, height: u32, bg: Rgba) {
        let area = self.clip.current().intersect(&ClipRect::new(x, y, width, height));
        for row in area.y..area.y.saturating_add_unsigned(area.height) {
            for col in area.x..area.x.saturating_add_unsigned(area.width) {
                if let Some(idx) = self.index(col, row) {
                    let cell = &mut self.cells[idx];
                    cell.bg = bg.blend_over(cell.bg);
                }
            }
        }
    }

    /// Draw a run of text starting at (`x`, `y`); returns the columns advanced.
    ///
    /// The foreground is composited over whatever background ends up under
    /// each cell, so translucent label colors fade toward the segment
    /// background. Wide graphemes write a continuation cell.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: Style) -> u32 {
        let mut col = x;
        for grapheme in graphemes(text) {
            if grapheme.chars().all(char::is_control) {
                continue;
            }
            let width = grapheme_width(grapheme);
            if width == 0 {
                continue;
            }
            self.put_glyph(col, y, CellContent::from_grapheme(grapheme), width, style);
            col = col.saturating_add(width as i32);
        }
        col.abs_diff(x)
    }

    fn put_glyph(&mut self, x: i32, y: i32, content: CellContent, width: usize, style: Style) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if !self.clip.contains(x, y) {
            return;
        }
        // A wide glyph whose second half is clipped would leave a dangling
        // half character behind; draw a blank instead.
        let wide_clipped = width == 2 && !self.clip.contains(x + 1, y);

        let under = &self.cells[idx];
        let bg = style.bg.map_or(under.bg, |bg| bg.blend_over(under.bg));
        let fg = style.fg.unwrap_or(under.fg).blend_over(bg);
        self.cells[idx] = Cell {
            content: if wide_clipped { CellContent::Empty } else { content },
            fg,
            bg,
            attributes: style.attributes,
        };

        if width == 2 && !wide_clipped {
            if let Some(next) = self.index(x + 1, y) {
                self.cells[next] = Cell::continuation(bg);
            }
        }
    }

    /// Push a clip rectangle (intersected with the current clip).
    pub fn push_clip(&mut self, rect: ClipRect) {
        self.clip.push(rect);
    }

    /// Pop the last clip rectangle.
    pub fn pop_clip(&mut self) {
        self.clip.pop();
    }

    /// Current effective clip.
    #[must_use]
    pub fn clip(&self) -> ClipRect {
        self.clip.current()
    }

    /// Iterate rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Printable text of a row with trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut out = String::new();
        if let Some(row) = self.rows().nth(y as usize) {
            for cell in row {
                cell.content.push_to(&mut out);
            }
        }
        out.trim_end().to_string()
    }

    /// Printable text of every row, trailing blanks trimmed.
    #[must_use]
    pub fn to_plain_lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }
}
