//! Places a segment inside the scrolled viewport.

use super::metrics::prefix_width;
use super::{LayoutMode, Rect, ViewportState};

/// Logical rectangle of segment `index` relative to the visible viewport.
///
/// Returns `None` when `index` is outside `widths`. Insets only shift
/// dynamic rows. The result never accounts for mirroring; see
/// [`ViewportState::mirror_x`].
#[must_use]
pub fn resolve(index: usize, widths: &[u32], mode: LayoutMode, viewport: &ViewportState) -> Option<Rect> {
    let width = *widths.get(index)?;
    let content_x = match mode {
        LayoutMode::Fixed { .. } => i64::from(width) * index as i64,
        LayoutMode::Dynamic => i64::from(viewport.leading_inset()) + prefix_width(widths, index),
    };
    let x = content_x - i64::from(viewport.scroll_offset);
    Some(Rect::new(clamp_i32(x), 0, width, viewport.height))
}

/// Position of segment `index` in content coordinates (scroll offset 0, no inset).
#[must_use]
pub fn content_x(index: usize, widths: &[u32]) -> i64 {
    prefix_width(widths, index)
}

pub(crate) fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;

    #[test]
    fn test_fixed_resolve() {
        let viewport = ViewportState::new(300, 3);
        let rect = resolve(1, &[100; 3], LayoutMode::Fixed { max_visible: 3 }, &viewport).unwrap();
        assert_eq!(rect, Rect::new(100, 0, 100, 3));
    }

    #[test]
    fn test_fixed_resolve_ignores_insets() {
        let viewport = ViewportState::new(300, 3).with_insets(Insets::new(10, 0));
        let mode = LayoutMode::Fixed { max_visible: 3 };
        assert_eq!(resolve(0, &[100; 3], mode, &viewport).unwrap().x, 0);
        assert_eq!(resolve(2, &[100; 3], mode, &viewport).unwrap().right(), 300);

        let scrolled = viewport.with_scroll_offset(40);
        assert_eq!(resolve(1, &[100; 3], mode, &scrolled).unwrap().x, 60);
    }

    #[test]
    fn test_dynamic_resolve_with_scroll_and_inset() {
        let viewport = ViewportState::new(50, 2)
            .with_insets(Insets::new(2, 0))
            .with_scroll_offset(15);
        let rect = resolve(2, &[10, 20, 30], LayoutMode::Dynamic, &viewport).unwrap();
        assert_eq!(rect.x, 2 + 30 - 15);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 2);
    }

    #[test]
    fn test_mirrored_uses_right_inset_as_leading() {
        let viewport = ViewportState::new(50, 1)
            .with_insets(Insets::new(2, 7))
            .with_mirrored(true);
        let rect = resolve(0, &[10, 20], LayoutMode::Dynamic, &viewport).unwrap();
        assert_eq!(rect.x, 7);
    }

    #[test]
    fn test_out_of_range_is_none() {
        let viewport = ViewportState::new(50, 1);
        assert!(resolve(3, &[10, 20], LayoutMode::Dynamic, &viewport).is_none());
        assert!(resolve(0, &[], LayoutMode::Fixed { max_visible: 3 }, &viewport).is_none());
    }
}
