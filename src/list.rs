//! Toolkit-neutral view of the segment row.
//!
//! Renderers only need a count, a width per index and a view model for
//! each visible index; [`SegmentList`] is that contract.

use crate::control::SegmentedControl;
use crate::options::{SegmentState, StateStyle};
use crate::segment::{Badge, Glyph};

/// Everything needed to draw one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentView<'a> {
    pub index: usize,
    pub title: &'a str,
    /// Image for the current state (selected image when selected).
    pub image: Option<&'a Glyph>,
    pub badge: Option<Badge>,
    pub state: SegmentState,
    pub look: StateStyle,
    /// Whether this is the last segment (no trailing separator).
    pub is_last: bool,
}

/// A row of segments addressed by index.
pub trait SegmentList {
    fn item_count(&self) -> usize;

    /// Width of segment `index` in columns, 0 when out of range.
    fn width_for_index(&self, index: usize) -> u32;

    /// View model for segment `index`.
    fn render(&self, index: usize) -> Option<SegmentView<'_>>;
}

impl SegmentList for SegmentedControl {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn width_for_index(&self, index: usize) -> u32 {
        self.widths().get(index).copied().unwrap_or(0)
    }

    fn render(&self, index: usize) -> Option<SegmentView<'_>> {
        let segment = self.segment(index)?;
        let state = self.segment_state(index);
        Some(SegmentView {
            index,
            title: segment.title_str(),
            image: segment.image_for(state == SegmentState::Selected),
            badge: segment.badge,
            state,
            look: *self.options().states.get(state),
            is_last: index + 1 == self.len(),
        })
    }
}
