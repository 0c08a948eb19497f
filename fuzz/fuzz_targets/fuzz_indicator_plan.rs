//! Fuzz target for indicator planning.
//!
//! Arbitrary widths, viewports and selections must plan a span without
//! panicking, and the span must never be inverted.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use segstrip::geometry::{self, Insets, LayoutMode, PlanInput, ViewportState};

#[derive(Arbitrary, Debug)]
struct Input {
    intrinsic: Vec<u16>,
    viewport_width: u16,
    max_visible: u8,
    dynamic: bool,
    selected: u16,
    offset: i16,
    ratio: u8,
    leading: u8,
    trailing: u8,
    mirrored: bool,
}

fuzz_target!(|input: Input| {
    if input.intrinsic.is_empty() || input.intrinsic.len() > 64 {
        return;
    }
    let intrinsic: Vec<u32> = input.intrinsic.iter().map(|&w| u32::from(w)).collect();
    let mode = if input.dynamic {
        LayoutMode::Dynamic
    } else {
        LayoutMode::Fixed {
            max_visible: usize::from(input.max_visible.max(1)),
        }
    };
    let widths = geometry::segment_widths(mode, &intrinsic, u32::from(input.viewport_width));
    let selected = usize::from(input.selected) % widths.len();
    let insets = Insets::new(u32::from(input.leading), u32::from(input.trailing));
    let viewport = ViewportState::new(u32::from(input.viewport_width), 3)
        .with_insets(insets)
        .with_mirrored(input.mirrored)
        .with_scroll_offset(i32::from(input.offset));

    let Some(item) = geometry::resolve(selected, &widths, mode, &viewport) else {
        return;
    };
    let span = geometry::plan(&PlanInput {
        item,
        ratio: f32::from(input.ratio) / 255.0,
        viewport_width: viewport.width,
        insets,
        mirrored: input.mirrored,
        selected,
        widths: &widths,
        mode,
    });
    assert!(span.start <= span.end + 1, "inverted span {span:?}");
});
