//! End-to-end selection, scrolling and layout scenarios through the public API.

mod common;

use common::{init_logging, laid_out, settle};
use segstrip::geometry::Span;
use segstrip::{Error, LayoutMode, LayoutStyle, Options, Rgba, Segment, SegmentedControl, ViewportState};
use std::sync::{Arc, Mutex};
use tracing::info;

const FIXED_3: LayoutMode = LayoutMode::Fixed { max_visible: 3 };

/// Segments whose text-only intrinsic width is `width` (title plus margin).
fn sized(widths: &[u32]) -> Vec<Segment> {
    widths
        .iter()
        .map(|&width| Segment::new("x".repeat(width as usize - segstrip::content::TEXT_MARGIN as usize)))
        .collect()
}

fn dynamic(widths: &[u32], viewport: ViewportState) -> SegmentedControl {
    let options = Options::default().with_layout(LayoutMode::Dynamic);
    let mut control = SegmentedControl::with_content(sized(widths), LayoutStyle::OnlyLabel, options).unwrap();
    control.on_viewport_change(viewport);
    control
}

#[test]
fn test_middle_of_three_fixed() {
    init_logging();
    let mut control = laid_out(3, FIXED_3, 300, 3);
    assert_eq!(control.widths(), &[100, 100, 100]);

    control.set_selected_index(1).unwrap();
    settle(&mut control);
    info!(indicator = ?control.indicator_span(), "middle selected");
    assert_eq!(control.indicator_span(), Some(Span::new(100, 199)));
}

#[test]
fn test_first_then_last_callbacks_and_edges() {
    init_logging();
    let mut control = laid_out(6, FIXED_3, 90, 3);
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    control.set_on_change(move |_, index| sink.lock().unwrap().push(index));

    control.set_selected_index(0).unwrap();
    settle(&mut control);
    assert_eq!(control.indicator_span().map(|span| span.start), Some(0));

    control.set_selected_index(5).unwrap();
    assert!(control.is_animating());
    settle(&mut control);
    assert_eq!(control.indicator_span().map(|span| span.end), Some(90));
    assert_eq!(control.scroll_offset(), 90);

    assert_eq!(*calls.lock().unwrap(), vec![0, 5]);
}

#[test]
fn test_reselecting_same_index_is_silent() {
    let mut control = laid_out(3, FIXED_3, 300, 3);
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    control.set_on_change(move |_, _| *sink.lock().unwrap() += 1);

    control.set_selected_index(2).unwrap();
    settle(&mut control);
    assert!(!control.set_selected_index(2).unwrap());
    assert!(!control.is_animating());
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn test_dynamic_slack_rounding() {
    let control = dynamic(&[50, 50, 50], ViewportState::new(200, 3));
    assert_eq!(control.widths(), &[66, 67, 67]);

    let control = dynamic(&[50, 50, 50], ViewportState::new(300, 3));
    assert_eq!(control.widths(), &[100, 100, 100]);
}

#[test]
fn test_dynamic_overflow_centers_then_clamps() {
    let mut control = dynamic(&[20; 6], ViewportState::new(50, 3));
    assert_eq!(control.widths(), &[20; 6]);

    control.set_selected_index(3).unwrap();
    settle(&mut control);
    assert_eq!(control.scroll_offset(), 45);
    assert_eq!(control.item_rect(3).map(|rect| rect.x), Some(15));
    assert_eq!(control.indicator_span(), Some(Span::new(15, 34)));

    control.set_selected_index(5).unwrap();
    settle(&mut control);
    assert_eq!(control.scroll_offset(), 70);
    assert_eq!(control.indicator_span(), Some(Span::new(30, 50)));
}

#[test]
fn test_scroll_drags_indicator_with_segment() {
    let mut control = laid_out(6, FIXED_3, 90, 3);
    control.set_selected_index(2).unwrap();
    settle(&mut control);
    let before = control.indicator_span().unwrap();
    let offset = control.scroll_offset();

    let moved = control.scroll_by(-10);
    let delta = moved - offset;
    assert_ne!(delta, 0);
    let rect = control.item_rect(2).unwrap();
    assert_eq!(control.indicator_span(), Some(Span::new(rect.x, rect.right() - 1)));
    assert_ne!(control.indicator_span(), Some(before));
}

#[test]
fn test_badges_roundtrip_and_bounds() {
    let mut control = laid_out(3, FIXED_3, 300, 3);
    let before = control.segment(1).cloned();

    control.add_badge(1, 5, Rgba::RED).unwrap();
    assert_eq!(control.segment(1).and_then(|segment| segment.badge).map(|badge| badge.count), Some(5));
    control.remove_badge(1).unwrap();
    assert_eq!(control.segment(1).cloned(), before);

    assert!(matches!(
        control.add_badge(3, 1, Rgba::RED),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    ));
}

#[test]
fn test_selection_before_layout_is_applied_on_first_viewport() {
    let mut control =
        SegmentedControl::with_content(common::disaster_segments(4), LayoutStyle::OnlyLabel, Options::default())
            .unwrap();
    control.set_selected_index(3).unwrap();
    assert_eq!(control.indicator_span(), None);

    control.on_viewport_change(ViewportState::new(80, 3));
    assert!(!control.is_animating());
    assert_eq!(control.indicator_span(), Some(Span::new(60, 80)));
}

#[test]
fn test_tap_selects_mirrored_segment() {
    let mut control = laid_out(3, FIXED_3, 30, 3);
    control.on_viewport_change(ViewportState::new(30, 3).with_mirrored(true));

    assert_eq!(control.tap(2), Some(2));
    settle(&mut control);
    assert_eq!(control.selected_index(), Some(2));
    assert_eq!(control.tap(-1), None);
}
