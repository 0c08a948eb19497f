#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a different subset

use segstrip::{
    AnsiWriter, ColorMode, LayoutMode, LayoutStyle, LogLevel, Options, Segment, SegmentedControl,
    Surface, ViewportState,
};
use std::time::Duration;
use tracing::Level;

/// Route segstrip's log hook into `tracing`, printed through the test writer.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
    segstrip::set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!(target: "segstrip", "{message}"),
        LogLevel::Info => tracing::info!(target: "segstrip", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "segstrip", "{message}"),
        LogLevel::Error => tracing::error!(target: "segstrip", "{message}"),
    });
}

/// Text-only segments named after the demo's disaster tabs.
pub fn disaster_segments(count: usize) -> Vec<Segment> {
    ["Tornado", "Earthquakes", "Extreme heat", "Eruption", "Floods", "Wildfires"]
        .iter()
        .cycle()
        .take(count)
        .map(|title| Segment::new(*title))
        .collect()
}

/// Options in the given layout mode with animations of `duration_ms`.
pub fn options(layout: LayoutMode, duration_ms: u64) -> Options {
    Options::default()
        .with_layout(layout)
        .with_animation_duration(Duration::from_millis(duration_ms))
}

/// A laid-out control of `count` text segments.
pub fn laid_out(count: usize, layout: LayoutMode, width: u32, height: u32) -> SegmentedControl {
    let mut control =
        SegmentedControl::with_content(disaster_segments(count), LayoutStyle::OnlyLabel, options(layout, 100))
            .expect("valid options");
    control.on_viewport_change(ViewportState::new(width, height));
    control
}

/// Advance until the control stops animating; returns the frame count.
pub fn settle(control: &mut SegmentedControl) -> u32 {
    let mut frames = 0;
    while control.advance(Duration::from_millis(16)) {
        frames += 1;
        assert!(frames < 1_000, "animation never settled");
    }
    frames
}

/// Draw `control` and feed the ANSI output through a vt100 parser.
pub fn terminal_screen(control: &SegmentedControl, mode: ColorMode) -> vt100::Parser {
    let viewport = control.viewport().copied().expect("laid out");
    let mut surface = Surface::new(viewport.width, viewport.height);
    segstrip::render::draw(control, &mut surface, 0, 0);

    let mut writer = AnsiWriter::with_color_mode(Vec::new(), mode);
    writer.present(&surface, 0, 0);
    writer.flush().expect("flush to Vec");
    let bytes = writer.into_inner();

    let mut parser = vt100::Parser::new(viewport.height as u16, viewport.width as u16, 0);
    parser.process(&bytes);
    parser
}

/// Screen rows with trailing spaces trimmed.
pub fn screen_rows(parser: &vt100::Parser) -> Vec<String> {
    let screen = parser.screen();
    let (rows, cols) = screen.size();
    (0..rows)
        .map(|row| {
            let mut line = String::new();
            for col in 0..cols {
                if let Some(cell) = screen.cell(row, col) {
                    line.push_str(&cell.contents());
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
