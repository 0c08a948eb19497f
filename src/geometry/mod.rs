//! Indicator and selection geometry.
//!
//! Everything here is pure integer math over terminal columns:
//!
//! - [`metrics`] turns intrinsic content widths into segment widths,
//! - [`resolver`] places a segment inside the scrolled viewport,
//! - [`planner`] decides which columns the indicator covers,
//! - [`scroll`] clamps offsets and computes scroll-into-view targets.
//!
//! All positions are logical left-to-right. Mirroring for right-to-left
//! layouts happens once, at render and hit-test time, through
//! [`ViewportState::mirror_x`].

pub mod metrics;
pub mod planner;
pub mod resolver;
pub mod scroll;

pub use metrics::{segment_width, segment_widths};
pub use planner::{PlanInput, plan, track};
pub use resolver::resolve;

/// Layout mode of the segment row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// A constant number of segments is visible; all share one width.
    Fixed { max_visible: usize },
    /// Each segment is as wide as its content, stretched to fill spare room.
    Dynamic,
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::Fixed { max_visible: 4 }
    }
}

/// Axis-aligned rectangle in viewport columns/rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// Horizontal midpoint as a float, matching the planner's rounding.
    #[must_use]
    pub fn mid_x(&self) -> f64 {
        f64::from(self.x) + f64::from(self.width) / 2.0
    }

    #[must_use]
    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.x && x < self.right()
    }
}

/// Half-open column range `[start, end)` covered by the indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: i32,
    pub end: i32,
}

impl Span {
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Covered columns; empty and inverted spans have width 0.
    #[must_use]
    pub fn width(&self) -> u32 {
        if self.end > self.start {
            self.end.abs_diff(self.start)
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Shift both ends by `dx`.
    #[must_use]
    pub fn offset(self, dx: i32) -> Self {
        Self::new(self.start.saturating_add(dx), self.end.saturating_add(dx))
    }
}

/// Physical insets around the scrollable content (safe-area style padding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
}

impl Insets {
    #[must_use]
    pub const fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }
}

/// What the host knows about the visible area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub scroll_offset: i32,
    pub insets: Insets,
    /// Right-to-left layout: the whole row is flipped horizontally.
    pub mirrored: bool,
}

impl ViewportState {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_offset: 0,
            insets: Insets::new(0, 0),
            mirrored: false,
        }
    }

    #[must_use]
    pub const fn with_insets(self, insets: Insets) -> Self {
        Self { insets, ..self }
    }

    #[must_use]
    pub const fn with_mirrored(self, mirrored: bool) -> Self {
        Self { mirrored, ..self }
    }

    #[must_use]
    pub const fn with_scroll_offset(self, scroll_offset: i32) -> Self {
        Self {
            scroll_offset,
            ..self
        }
    }

    /// The viewport as `mode` lays segments out in it.
    ///
    /// Fixed segments split the full width between them, so insets only
    /// apply to dynamic rows.
    #[must_use]
    pub const fn for_layout(self, mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Fixed { .. } => Self {
                insets: Insets::new(0, 0),
                ..self
            },
            LayoutMode::Dynamic => self,
        }
    }

    /// Inset before the first segment in logical order.
    #[must_use]
    pub fn leading_inset(&self) -> u32 {
        if self.mirrored {
            self.insets.right
        } else {
            self.insets.left
        }
    }

    /// Inset after the last segment in logical order.
    #[must_use]
    pub fn trailing_inset(&self) -> u32 {
        if self.mirrored {
            self.insets.left
        } else {
            self.insets.right
        }
    }

    /// Width as a signed column count.
    #[must_use]
    pub fn width_i32(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Map a logical range `[x, x + width)` to its physical start column.
    #[must_use]
    pub fn mirror_x(&self, x: i32, width: u32) -> i32 {
        if self.mirrored {
            self.width_i32() - x.saturating_add_unsigned(width)
        } else {
            x
        }
    }

    /// Map a logical span to physical columns.
    #[must_use]
    pub fn mirror_span(&self, span: Span) -> Span {
        if self.mirrored {
            let w = self.width_i32();
            Span::new(w - span.end, w - span.start)
        } else {
            span
        }
    }

    /// Map a physical column to a logical one.
    #[must_use]
    pub fn logical_column(&self, column: i32) -> i32 {
        if self.mirrored {
            self.width_i32() - 1 - column
        } else {
            column
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout_drops_insets() {
        let viewport = ViewportState::new(300, 3)
            .with_insets(Insets::new(10, 4))
            .with_scroll_offset(7);
        let fixed = viewport.for_layout(LayoutMode::Fixed { max_visible: 3 });
        assert_eq!(fixed.insets, Insets::new(0, 0));
        assert_eq!(fixed.scroll_offset, 7);
        assert_eq!(viewport.for_layout(LayoutMode::Dynamic), viewport);
    }

    #[test]
    fn test_span_width() {
        assert_eq!(Span::new(100, 199).width(), 99);
        assert_eq!(Span::new(5, 5).width(), 0);
        assert!(Span::new(7, 3).is_empty());
        assert_eq!(Span::new(1, 4).offset(-2), Span::new(-1, 2));
    }

    #[test]
    fn test_insets_swap_when_mirrored() {
        let viewport = ViewportState::new(80, 3).with_insets(Insets::new(2, 5));
        assert_eq!(viewport.leading_inset(), 2);
        assert_eq!(viewport.trailing_inset(), 5);

        let mirrored = viewport.with_mirrored(true);
        assert_eq!(mirrored.leading_inset(), 5);
        assert_eq!(mirrored.trailing_inset(), 2);
    }

    #[test]
    fn test_mirror_x_flips_around_center() {
        let viewport = ViewportState::new(300, 3).with_mirrored(true);
        assert_eq!(viewport.mirror_x(0, 100), 200);
        assert_eq!(viewport.mirror_x(100, 100), 100);
        assert_eq!(viewport.mirror_span(Span::new(0, 100)), Span::new(200, 300));
        assert_eq!(viewport.logical_column(0), 299);
        assert_eq!(viewport.logical_column(299), 0);
    }

    #[test]
    fn test_mirror_is_identity_ltr() {
        let viewport = ViewportState::new(300, 3);
        assert_eq!(viewport.mirror_x(42, 10), 42);
        assert_eq!(viewport.logical_column(7), 7);
    }

    #[test]
    fn test_rect_mid_and_contains() {
        let rect = Rect::new(100, 0, 100, 3);
        assert_eq!(rect.right(), 200);
        assert!((rect.mid_x() - 150.0).abs() < f64::EPSILON);
        assert!(rect.contains_x(100));
        assert!(!rect.contains_x(200));
    }
}
