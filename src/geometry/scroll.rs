//! Scroll range and scroll-into-view targets.

use super::metrics::{content_width, prefix_width};
use super::resolver::clamp_i32;
use super::ViewportState;

/// Largest valid scroll offset: content plus insets minus the viewport.
#[must_use]
pub fn max_offset(widths: &[u32], viewport: &ViewportState) -> i32 {
    let total = content_width(widths) + i64::from(viewport.insets.horizontal());
    clamp_i32((total - i64::from(viewport.width)).max(0))
}

/// Clamp `offset` into `0..=max_offset`.
#[must_use]
pub fn clamp_offset(offset: i32, widths: &[u32], viewport: &ViewportState) -> i32 {
    offset.clamp(0, max_offset(widths, viewport))
}

/// Offset that centers segment `index`, clamped at the content edges.
///
/// Returns the current offset when `index` is out of range.
#[must_use]
pub fn scroll_into_view(index: usize, widths: &[u32], viewport: &ViewportState) -> i32 {
    let Some(&width) = widths.get(index) else {
        return viewport.scroll_offset;
    };
    let content_x = i64::from(viewport.leading_inset()) + prefix_width(widths, index);
    let half_slack = (i64::from(viewport.width) - i64::from(width)).div_euclid(2);
    clamp_offset(clamp_i32(content_x - half_slack), widths, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;

    #[test]
    fn test_max_offset() {
        let viewport = ViewportState::new(40, 1);
        assert_eq!(max_offset(&[10; 10], &viewport), 60);
        assert_eq!(max_offset(&[10; 3], &viewport), 0);

        let inset = viewport.with_insets(Insets::new(2, 3));
        assert_eq!(max_offset(&[10; 10], &inset), 65);
    }

    #[test]
    fn test_clamp_offset() {
        let viewport = ViewportState::new(40, 1);
        assert_eq!(clamp_offset(-5, &[10; 10], &viewport), 0);
        assert_eq!(clamp_offset(99, &[10; 10], &viewport), 60);
        assert_eq!(clamp_offset(12, &[10; 10], &viewport), 12);
    }

    #[test]
    fn test_scroll_into_view_centers() {
        let viewport = ViewportState::new(40, 1);
        assert_eq!(scroll_into_view(4, &[10; 10], &viewport), 25);
    }

    #[test]
    fn test_scroll_into_view_clamps_at_edges() {
        let viewport = ViewportState::new(40, 1).with_scroll_offset(30);
        assert_eq!(scroll_into_view(0, &[10; 10], &viewport), 0);
        assert_eq!(scroll_into_view(9, &[10; 10], &viewport), 60);
        assert_eq!(scroll_into_view(12, &[10; 10], &viewport), 30);
    }

    #[test]
    fn test_content_that_fits_never_scrolls() {
        let viewport = ViewportState::new(300, 1);
        assert_eq!(scroll_into_view(2, &[100; 3], &viewport), 0);
    }
}
