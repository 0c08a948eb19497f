//! Indicator span planning.
//!
//! Given where the selected segment sits in the viewport, decide which
//! columns the indicator (and the selection background, which is planned
//! the same way with a ratio of 1) should cover once the move settles.
//!
//! Fixed mode pins the indicator to the strip edges when the selection is
//! at or near either end so it never looks detached while the row scrolls.
//! Dynamic mode, when the content overflows, predicts where the segment
//! will be once it has been scrolled to the center (or as close to it as
//! the content edges allow).

use super::metrics::{content_width, prefix_width};
use super::{Insets, LayoutMode, Rect, Span};

/// Everything [`plan`] needs to know about the selected segment.
#[derive(Clone, Copy, Debug)]
pub struct PlanInput<'a> {
    /// Logical rectangle of the selected segment.
    pub item: Rect,
    /// Fraction of the segment width the shape spans, in `0.0..=1.0`.
    pub ratio: f32,
    pub viewport_width: u32,
    /// Physical insets; swapped into logical order when `mirrored`.
    pub insets: Insets,
    pub mirrored: bool,
    pub selected: usize,
    /// Widths of every segment, in logical order.
    pub widths: &'a [u32],
    pub mode: LayoutMode,
}

impl PlanInput<'_> {
    fn count(&self) -> usize {
        self.widths.len()
    }

    fn is_last(&self) -> bool {
        self.selected + 1 >= self.count()
    }

    fn leading_inset(&self) -> i64 {
        i64::from(if self.mirrored { self.insets.right } else { self.insets.left })
    }

    fn trailing_inset(&self) -> i64 {
        i64::from(if self.mirrored { self.insets.left } else { self.insets.right })
    }
}

/// Shape width for a segment: `floor(width * ratio)`.
#[must_use]
pub fn shape_width(width: u32, ratio: f32) -> i64 {
    (f64::from(width) * f64::from(ratio.clamp(0.0, 1.0))).floor() as i64
}

/// Shape centered on the item's midpoint, without the separator inset.
fn midpoint(item: &Rect, ratio: f32) -> (i64, i64) {
    let half = shape_width(item.width, ratio) as f64 / 2.0;
    let mid = item.mid_x();
    ((mid - half).floor() as i64, (mid + half).floor() as i64)
}

/// Columns the indicator should cover for the selected segment.
#[must_use]
pub fn plan(input: &PlanInput<'_>) -> Span {
    let (start, end) = match input.mode {
        LayoutMode::Fixed { .. } => plan_fixed(input),
        LayoutMode::Dynamic => plan_dynamic(input),
    };
    finish(start, end, input.is_last())
}

/// Span that follows the segment exactly, used while the row is dragged.
#[must_use]
pub fn track(item: &Rect, ratio: f32, is_last: bool) -> Span {
    let (start, end) = midpoint(item, ratio);
    finish(start, end, is_last)
}

/// Leaves the last column free for the vertical separator.
fn finish(start: i64, end: i64, is_last: bool) -> Span {
    let end = if is_last { end } else { end - 1 };
    Span::new(clamp(start), clamp(end))
}

fn plan_fixed(input: &PlanInput<'_>) -> (i64, i64) {
    let item = &input.item;
    let (mut start, mut end) = midpoint(item, input.ratio);

    let w = i64::from(item.width);
    let vw = i64::from(input.viewport_width);
    let shape = shape_width(item.width, input.ratio);
    let half_gap = (w - shape).div_euclid(2);
    let min_x = i64::from(item.x);
    let max_x = i64::from(item.right());

    let is_first = input.selected == 0;
    let is_last = input.is_last();

    if !is_first && !is_last {
        let last_min_x = vw - w;
        let near_end = max_x >= vw || (min_x < last_min_x && max_x > last_min_x);
        if near_end {
            start = vw - 2 * w + half_gap;
            end = start + shape;
        }

        let near_start = min_x <= 0 || (min_x < w && max_x > w);
        if near_start {
            end = 2 * w - half_gap;
            start = end - shape;
        }
    }

    if is_first {
        start = 0;
        end = shape;
    }

    if is_last {
        end = vw;
        start = end - shape;
    }

    (start, end)
}

fn plan_dynamic(input: &PlanInput<'_>) -> (i64, i64) {
    let vw = i64::from(input.viewport_width);
    if content_width(input.widths) <= vw {
        return midpoint(&input.item, input.ratio);
    }

    let selected = input.selected.min(input.count().saturating_sub(1));
    let w = i64::from(input.widths.get(selected).copied().unwrap_or(0));
    let before = input.leading_inset() + prefix_width(input.widths, selected);
    let after = input.trailing_inset() + content_width(input.widths) - prefix_width(input.widths, selected + 1);
    let half_slack = (vw - w).div_euclid(2);

    let start = if before < half_slack {
        before
    } else if after < half_slack {
        vw - after - w
    } else {
        half_slack
    };
    (start, start + w)
}

fn clamp(value: i64) -> i32 {
    super::resolver::clamp_i32(value)
}
