//! Segment widths from layout mode and intrinsic content widths.

use super::LayoutMode;

/// Width of segment `index`.
///
/// Prefer [`segment_widths`] when every width is needed; this computes the
/// whole row to honor the remainder distribution of dynamic mode.
#[must_use]
pub fn segment_width(index: usize, mode: LayoutMode, intrinsic: &[u32], viewport_width: u32) -> u32 {
    match mode {
        LayoutMode::Fixed { max_visible } => {
            if index < intrinsic.len() {
                fixed_width(max_visible, intrinsic.len(), viewport_width)
            } else {
                0
            }
        }
        LayoutMode::Dynamic => segment_widths(mode, intrinsic, viewport_width)
            .get(index)
            .copied()
            .unwrap_or(0),
    }
}

/// Widths of every segment, in order.
///
/// Dynamic mode stretches content that fits so the row sums to exactly
/// `viewport_width`: every segment gains `slack / n` columns and the
/// `slack % n` leftover columns go one each to the trailing segments.
#[must_use]
pub fn segment_widths(mode: LayoutMode, intrinsic: &[u32], viewport_width: u32) -> Vec<u32> {
    let count = intrinsic.len();
    match mode {
        LayoutMode::Fixed { max_visible } => {
            vec![fixed_width(max_visible, count, viewport_width); count]
        }
        LayoutMode::Dynamic => {
            if count == 0 {
                return Vec::new();
            }
            let total: u64 = intrinsic.iter().map(|&w| u64::from(w)).sum();
            let viewport = u64::from(viewport_width);
            if total > viewport {
                return intrinsic.to_vec();
            }

            let slack = viewport - total;
            let n = count as u64;
            let base = slack / n;
            let remainder = (slack % n) as usize;
            let first_extra = count - remainder;
            intrinsic
                .iter()
                .enumerate()
                .map(|(idx, &w)| {
                    let extra = base + u64::from(idx >= first_extra);
                    // Fits: total + slack == viewport_width <= u32::MAX.
                    (u64::from(w) + extra) as u32
                })
                .collect()
        }
    }
}

fn fixed_width(max_visible: usize, count: usize, viewport_width: u32) -> u32 {
    let effective = max_visible.min(count);
    if effective == 0 {
        return 0;
    }
    viewport_width / u32::try_from(effective).unwrap_or(u32::MAX)
}

/// Sum of all widths.
#[must_use]
pub fn content_width(widths: &[u32]) -> i64 {
    widths.iter().map(|&w| i64::from(w)).sum()
}

/// Sum of the widths strictly before `index`.
#[must_use]
pub fn prefix_width(widths: &[u32], index: usize) -> i64 {
    content_width(&widths[..index.min(widths.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_divides_by_visible_count() {
        let widths = segment_widths(LayoutMode::Fixed { max_visible: 3 }, &[9; 3], 300);
        assert_eq!(widths, vec![100, 100, 100]);

        let widths = segment_widths(LayoutMode::Fixed { max_visible: 4 }, &[9; 6], 81);
        assert_eq!(widths, vec![20; 6]);
    }

    #[test]
    fn test_fixed_fewer_segments_than_visible() {
        let widths = segment_widths(LayoutMode::Fixed { max_visible: 4 }, &[1, 1], 80);
        assert_eq!(widths, vec![40, 40]);
    }

    #[test]
    fn test_fixed_zero_visible_is_zero_width() {
        let mode = LayoutMode::Fixed { max_visible: 0 };
        assert_eq!(segment_widths(mode, &[5, 5], 80), vec![0, 0]);
        assert_eq!(segment_width(0, mode, &[5, 5], 80), 0);
    }

    #[test]
    fn test_dynamic_slack_goes_to_trailing_segments() {
        let widths = segment_widths(LayoutMode::Dynamic, &[50, 50, 50], 200);
        assert_eq!(widths, vec![66, 67, 67]);
        assert_eq!(widths.iter().sum::<u32>(), 200);
    }

    #[test]
    fn test_dynamic_even_split() {
        let widths = segment_widths(LayoutMode::Dynamic, &[50, 50, 50], 300);
        assert_eq!(widths, vec![100, 100, 100]);
    }

    #[test]
    fn test_dynamic_overflow_keeps_intrinsic() {
        let widths = segment_widths(LayoutMode::Dynamic, &[40, 70, 30], 100);
        assert_eq!(widths, vec![40, 70, 30]);
    }

    #[test]
    fn test_dynamic_exact_fit() {
        let widths = segment_widths(LayoutMode::Dynamic, &[10, 20, 30], 60);
        assert_eq!(widths, vec![10, 20, 30]);
    }

    #[test]
    fn test_empty_rows() {
        assert!(segment_widths(LayoutMode::Dynamic, &[], 100).is_empty());
        assert!(segment_widths(LayoutMode::Fixed { max_visible: 3 }, &[], 100).is_empty());
        assert_eq!(segment_width(0, LayoutMode::Dynamic, &[], 100), 0);
        assert_eq!(segment_width(0, LayoutMode::Fixed { max_visible: 3 }, &[], 100), 0);
    }

    #[test]
    fn test_single_width_matches_row() {
        let intrinsic = [12, 7, 30, 4];
        let row = segment_widths(LayoutMode::Dynamic, &intrinsic, 80);
        for (idx, &w) in row.iter().enumerate() {
            assert_eq!(segment_width(idx, LayoutMode::Dynamic, &intrinsic, 80), w);
        }
        assert_eq!(segment_width(9, LayoutMode::Dynamic, &intrinsic, 80), 0);
    }

    #[test]
    fn test_prefix_width() {
        let widths = [10, 20, 30];
        assert_eq!(prefix_width(&widths, 0), 0);
        assert_eq!(prefix_width(&widths, 2), 30);
        assert_eq!(prefix_width(&widths, 9), 60);
        assert_eq!(content_width(&widths), 60);
    }
}
