//! Paint a [`SegmentedControl`] onto a [`Surface`].
//!
//! Layers are drawn back to front:
//!
//! 1. control background
//! 2. horizontal separator rows
//! 3. sliding selection background
//! 4. visible segments (state background, image, label)
//! 5. vertical separators
//! 6. badges
//! 7. indicator
//!
//! Geometry comes out of the control in logical left-to-right columns and
//! is flipped here when the viewport is mirrored.

pub mod label;

use crate::cell::{Cell, CellContent};
use crate::content::{ContentStrategy, LayoutStyle};
use crate::control::SegmentedControl;
use crate::geometry::{Rect, ViewportState};
use crate::list::{SegmentList, SegmentView};
use crate::options::{IndicatorEdge, Options, SegmentState};
use crate::style::Style;
use crate::surface::{ClipRect, Surface};

use label::{draw_badge, draw_image, draw_label};

/// Horizontal separator glyph.
pub const HORIZONTAL_LINE: char = '─';
/// Vertical separator glyph.
pub const VERTICAL_LINE: char = '│';

/// Row bands of the control, relative to its top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rows {
    top_separator: u32,
    content_top: u32,
    content_height: u32,
    bottom_separator: u32,
}

impl Rows {
    fn new(options: &Options, height: u32) -> Self {
        let top = options.top_separator_rows().min(height);
        let bottom = options.bottom_separator_rows().min(height - top);
        Self {
            top_separator: top,
            content_top: top,
            content_height: height - top - bottom,
            bottom_separator: bottom,
        }
    }

    fn content_bottom(&self) -> u32 {
        self.content_top + self.content_height
    }

    /// Indicator rows as `(first, count)`.
    fn indicator(&self, edge: IndicatorEdge, height: u32) -> (u32, u32) {
        let height = height.min(self.content_height);
        match edge {
            IndicatorEdge::Top => (self.content_top, height),
            IndicatorEdge::Bottom => (self.content_bottom() - height, height),
        }
    }

    /// Content rows left for image and label once the indicator is placed.
    fn label_band(&self, options: &Options) -> (u32, u32) {
        let Some(indicator) = options.indicator else {
            return (self.content_top, self.content_height);
        };
        if indicator.height >= self.content_height {
            return (self.content_top, self.content_height);
        }
        let rest = self.content_height - indicator.height;
        match indicator.edge {
            IndicatorEdge::Top => (self.content_top + indicator.height, rest),
            IndicatorEdge::Bottom => (self.content_top, rest),
        }
    }
}

/// Draw the control with its top-left corner at (`x`, `y`).
///
/// Does nothing until the control has a viewport.
pub fn draw(control: &SegmentedControl, surface: &mut Surface, x: i32, y: i32) {
    let Some(viewport) = control.viewport().copied() else {
        return;
    };
    let options = control.options();
    let rows = Rows::new(options, viewport.height);
    let origin = (x, y);

    surface.push_clip(ClipRect::new(x, y, viewport.width, viewport.height));

    surface.fill_rect(x, y, viewport.width, viewport.height, options.background);
    draw_horizontal_separators(surface, options, &rows, &viewport, origin);
    draw_selection_layer(control, surface, &rows, &viewport, origin);

    let strategy = mirrored_strategy(control.style(), viewport.mirrored);
    let range = control.visible_range();
    for index in range.clone() {
        if let Some(view) = control.render(index) {
            draw_segment(control, surface, &view, &strategy, &rows, &viewport, origin);
        }
    }
    for index in range.clone() {
        draw_vertical_separator(control, surface, index, &rows, &viewport, origin);
    }
    for index in range {
        if let Some(view) = control.render(index) {
            if let (Some(badge), Some(area)) = (view.badge, content_rect(control, index, &viewport, origin)) {
                let area = Rect::new(area.x, y + rows.content_top as i32, area.width, rows.content_height);
                draw_badge(surface, area, &badge, viewport.mirrored);
            }
        }
    }
    draw_indicator(control, surface, &rows, &viewport, origin);

    surface.pop_clip();
}

/// Image-before-label reads image-after-label once the row is flipped.
fn mirrored_strategy(style: LayoutStyle, mirrored: bool) -> ContentStrategy {
    let style = match (style, mirrored) {
        (LayoutStyle::ImageBeforeLabel, true) => LayoutStyle::ImageAfterLabel,
        (LayoutStyle::ImageAfterLabel, true) => LayoutStyle::ImageBeforeLabel,
        (style, _) => style,
    };
    style.strategy()
}

/// Physical columns of segment `index` without its separator column.
fn content_rect(control: &SegmentedControl, index: usize, viewport: &ViewportState, origin: (i32, i32)) -> Option<Rect> {
    let rect = control.item_rect(index)?;
    let is_last = index + 1 == control.item_count();
    let separator = u32::from(!is_last && control.options().vertical_separator.is_some());
    let width = rect.width.saturating_sub(separator);
    let x = viewport.mirror_x(rect.x, width);
    Some(Rect::new(origin.0 + x, origin.1, width, viewport.height))
}

fn draw_horizontal_separators(
    surface: &mut Surface,
    options: &Options,
    rows: &Rows,
    viewport: &ViewportState,
    origin: (i32, i32),
) {
    let Some(separator) = options.horizontal_separator else {
        return;
    };
    let style = Style::fg(separator.color);
    let bands = [
        (0, rows.top_separator),
        (rows.content_bottom(), rows.bottom_separator),
    ];
    for (first, count) in bands {
        for row in first..first + count {
            for col in 0..viewport.width as i32 {
                surface.set_blended(
                    origin.0 + col,
                    origin.1 + row as i32,
                    Cell::new(HORIZONTAL_LINE, style),
                );
            }
        }
    }
}

fn draw_selection_layer(
    control: &SegmentedControl,
    surface: &mut Surface,
    rows: &Rows,
    viewport: &ViewportState,
    origin: (i32, i32),
) {
    let background = control.options().states.selected.background;
    if background.is_transparent() {
        return;
    }
    let Some(span) = control.selection_span() else {
        return;
    };
    let span = viewport.mirror_span(span);
    surface.fill_rect(
        origin.0 + span.start,
        origin.1 + rows.content_top as i32,
        span.width(),
        rows.content_height,
        background,
    );
}

fn draw_segment(
    control: &SegmentedControl,
    surface: &mut Surface,
    view: &SegmentView<'_>,
    strategy: &ContentStrategy,
    rows: &Rows,
    viewport: &ViewportState,
    origin: (i32, i32),
) {
    let Some(area) = content_rect(control, view.index, viewport, origin) else {
        return;
    };
    let options = control.options();
    let (band_top, band_height) = rows.label_band(options);
    let content = Rect::new(area.x, origin.1 + rows.content_top as i32, area.width, rows.content_height);

    surface.push_clip(ClipRect::new(content.x, content.y, content.width, content.height));

    // The selected background is the sliding layer; other states fill in place.
    if view.state != SegmentState::Selected && !view.look.background.is_transparent() {
        surface.fill_rect(content.x, content.y, content.width, content.height, view.look.background);
    }

    let band = Rect::new(area.x, origin.1 + band_top as i32, area.width, band_height);
    let image_width = view.image.map_or(0, |glyph| glyph.width());
    let arranged = strategy.arrange(band, image_width);
    let style = view.look.label_style();

    if strategy.shows_image {
        if let (Some(image_area), Some(glyph)) = (arranged.image, view.image) {
            let image_style = Style::fg(view.look.text_color).with_attributes(view.look.attributes);
            draw_image(surface, image_area, glyph, options.image_fit, image_style);
        }
    }
    if strategy.shows_text {
        if let Some(label_area) = arranged.label {
            draw_label(
                surface,
                label_area,
                view.title,
                options.label_lines,
                options.label_alignment,
                style,
            );
        }
    }

    surface.pop_clip();
}

fn draw_vertical_separator(
    control: &SegmentedControl,
    surface: &mut Surface,
    index: usize,
    rows: &Rows,
    viewport: &ViewportState,
    origin: (i32, i32),
) {
    let Some(separator) = control.options().vertical_separator else {
        return;
    };
    if index + 1 >= control.item_count() {
        return;
    }
    let Some(rect) = control.item_rect(index) else {
        return;
    };
    if rect.width == 0 {
        return;
    }
    let column = viewport.mirror_x(rect.right() - 1, 1);
    let height = (f64::from(rows.content_height) * f64::from(separator.ratio)).round() as u32;
    let height = height.min(rows.content_height);
    let first = rows.content_top + (rows.content_height - height) / 2;
    let style = Style::fg(separator.color);
    for row in first..first + height {
        let x = origin.0 + column;
        let y = origin.1 + row as i32;
        let bg = surface.get(x, y).map(|cell| cell.bg);
        let mut cell = Cell::new(VERTICAL_LINE, style);
        cell.bg = bg.unwrap_or(cell.bg);
        surface.set(x, y, cell);
    }
}

fn draw_indicator(
    control: &SegmentedControl,
    surface: &mut Surface,
    rows: &Rows,
    viewport: &ViewportState,
    origin: (i32, i32),
) {
    let (Some(indicator), Some(span)) = (control.options().indicator, control.indicator_span()) else {
        return;
    };
    let span = viewport.mirror_span(span);
    let (first, count) = rows.indicator(indicator.edge, indicator.height);
    surface.tint_rect(
        origin.0 + span.start,
        origin.1 + first as i32,
        span.width(),
        count,
        indicator.color,
    );
}

/// True when the cell at (`x`, `y`) holds visible text.
#[must_use]
pub fn has_text(surface: &Surface, x: i32, y: i32) -> bool {
    surface
        .get(x, y)
        .is_some_and(|cell| !matches!(cell.content, CellContent::Empty | CellContent::Continuation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::LayoutMode;
    use crate::options::{HorizontalSeparator, IndicatorOptions, SeparatorKind, StateStyle, States};
    use crate::segment::Segment;
    use std::time::Duration;

    fn control(titles: &[&str], options: Options, width: u32, height: u32) -> SegmentedControl {
        let segments = titles.iter().map(|t| Segment::new(*t)).collect();
        let mut control = SegmentedControl::with_content(segments, LayoutStyle::OnlyLabel, options).unwrap();
        control.on_viewport_change(ViewportState::new(width, height));
        control
    }

    fn three_visible() -> Options {
        Options::default().with_layout(LayoutMode::Fixed { max_visible: 3 })
    }

    #[test]
    fn test_rows_default() {
        let rows = Rows::new(&Options::default(), 5);
        assert_eq!(rows.content_top, 1);
        assert_eq!(rows.content_height, 3);
        assert_eq!(rows.indicator(IndicatorEdge::Bottom, 1), (3, 1));
        assert_eq!(rows.indicator(IndicatorEdge::Top, 1), (1, 1));
        assert_eq!(rows.label_band(&Options::default()), (1, 2));
    }

    #[test]
    fn test_rows_tiny_height() {
        let rows = Rows::new(&Options::default(), 1);
        assert_eq!(rows.content_height, 0);
        assert_eq!(rows.indicator(IndicatorEdge::Bottom, 1), (1, 0));
    }

    #[test]
    fn test_plain_layout() {
        let control = control(&["One", "Two", "Six"], three_visible(), 30, 5);
        let mut surface = Surface::new(30, 5);
        draw(&control, &mut surface, 0, 0);
        let lines = surface.to_plain_lines();
        assert_eq!(lines[0], "─".repeat(30));
        assert_eq!(lines[1], "   One   │   Two   │   Six");
        assert_eq!(lines[2], "         │         │");
        assert_eq!(lines[3], "         │         │");
        assert_eq!(lines[4], "─".repeat(30));
    }

    #[test]
    fn test_indicator_tints_selected_columns() {
        let mut control = control(&["One", "Two", "Six"], three_visible(), 30, 5);
        control.set_selected_index(1).unwrap();
        control.advance(Duration::from_secs(1));
        let mut surface = Surface::new(30, 5);
        draw(&control, &mut surface, 0, 0);

        let orange = |x: i32| surface.get(x, 3).map(|cell| cell.bg) == Some(Rgba::ORANGE);
        assert!(!orange(9));
        assert!(orange(10));
        assert!(orange(18));
        assert!(!orange(19));
    }

    #[test]
    fn test_mirrored_layout_flips() {
        let mut control = control(&["One", "Two", "Six"], three_visible(), 30, 5);
        control.on_viewport_change(ViewportState::new(30, 5).with_mirrored(true));
        control.set_selected_index(0).unwrap();
        let mut surface = Surface::new(30, 5);
        draw(&control, &mut surface, 0, 0);

        assert_eq!(surface.row_text(1), "   Six    │   Two   │   One");
        let orange = |x: i32| surface.get(x, 3).map(|cell| cell.bg) == Some(Rgba::ORANGE);
        assert!(orange(21));
        assert!(orange(29));
        assert!(!orange(20));
    }

    #[test]
    fn test_selection_background_layer() {
        let mut states = States::default();
        states.selected = StateStyle {
            background: Rgba::WHITE,
            ..StateStyle::default()
        };
        let options = three_visible().with_states(states).with_indicator(None);
        let mut control = control(&["One", "Two", "Six"], options, 30, 5);
        control.set_selected_index(2).unwrap();
        let mut surface = Surface::new(30, 5);
        draw(&control, &mut surface, 0, 0);

        assert_eq!(surface.get(20, 1).map(|c| c.bg), Some(Rgba::WHITE));
        assert_eq!(surface.get(29, 3).map(|c| c.bg), Some(Rgba::WHITE));
        assert_eq!(surface.get(19, 2).map(|c| c.bg), Some(Rgba::LIGHT_GRAY));
        assert_eq!(surface.row_text(2), "   One   │   Two   │   Six");
    }

    #[test]
    fn test_badge_drawn_in_corner() {
        let options = three_visible().with_horizontal_separator(Some(HorizontalSeparator {
            kind: SeparatorKind::None,
            ..HorizontalSeparator::default()
        }));
        let mut control = control(&["One", "Two", "Six"], options, 30, 4);
        control.add_badge(0, 150, Rgba::RED).unwrap();
        let mut surface = Surface::new(30, 4);
        draw(&control, &mut surface, 0, 0);
        assert_eq!(surface.row_text(0), "     99+ │         │");
    }

    #[test]
    fn test_draw_offset_and_clip() {
        let control = control(&["One", "Two", "Six"], three_visible(), 30, 5);
        let mut surface = Surface::new(40, 7);
        draw(&control, &mut surface, 5, 1);
        assert_eq!(surface.row_text(0), "");
        assert_eq!(surface.row_text(2), "        One   │   Two   │   Six");
        assert!(has_text(&surface, 8, 2));
        assert!(!has_text(&surface, 0, 2));
    }

    #[test]
    fn test_unlaid_control_draws_nothing() {
        let control = SegmentedControl::new();
        let mut surface = Surface::new(4, 1);
        draw(&control, &mut surface, 0, 0);
        assert_eq!(surface.row_text(0), "");
    }

    #[test]
    fn test_indicator_rows_taller_than_content() {
        let options = three_visible().with_indicator(Some(IndicatorOptions {
            height: 9,
            ..IndicatorOptions::default()
        }));
        let mut control = control(&["One", "Two", "Six"], options, 30, 5);
        control.set_selected_index(0).unwrap();
        let mut surface = Surface::new(30, 5);
        draw(&control, &mut surface, 0, 0);
        assert_eq!(surface.get(0, 1).map(|c| c.bg), Some(Rgba::ORANGE));
        assert_eq!(surface.get(0, 0).map(|c| c.bg), Some(Rgba::LIGHT_GRAY));
    }
}
