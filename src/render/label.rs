//! Placing labels, images and badges inside a segment.

use crate::color::Rgba;
use crate::geometry::Rect;
use crate::options::{ImageFit, LabelAlignment};
use crate::segment::{Badge, Glyph};
use crate::style::Style;
use crate::surface::Surface;
use crate::unicode::{display_width, visual_order, wrap_label};

/// Lines of `title` that fit `area`, in visual order.
///
/// `max_lines == 0` allows as many lines as the area has rows.
#[must_use]
pub fn label_lines(title: &str, area: Rect, max_lines: usize) -> Vec<String> {
    let rows = area.height as usize;
    let limit = if max_lines == 0 { rows } else { max_lines.min(rows) };
    if limit == 0 {
        return Vec::new();
    }
    wrap_label(title, area.width as usize, limit)
        .iter()
        .map(|line| visual_order(line))
        .collect()
}

/// Start column of a run `width` columns wide aligned inside `area`.
#[must_use]
pub fn aligned_x(area: Rect, width: u32, alignment: LabelAlignment) -> i32 {
    let spare = area.width.saturating_sub(width);
    let shift = match alignment {
        LabelAlignment::Left => 0,
        LabelAlignment::Center => spare / 2,
        LabelAlignment::Right => spare,
    };
    area.x.saturating_add_unsigned(shift)
}

/// Start column of an image placed inside `area`.
#[must_use]
pub fn image_x(area: Rect, width: u32, fit: ImageFit) -> i32 {
    let alignment = match fit {
        ImageFit::Start => LabelAlignment::Left,
        ImageFit::Center => LabelAlignment::Center,
        ImageFit::End => LabelAlignment::Right,
    };
    aligned_x(area, width, alignment)
}

/// First row of a block of `lines` rows centered in `area`.
fn centered_row(area: Rect, lines: u32) -> i32 {
    area.y.saturating_add_unsigned(area.height.saturating_sub(lines) / 2)
}

/// Draw a wrapped, aligned and vertically centered label.
pub fn draw_label(
    surface: &mut Surface,
    area: Rect,
    title: &str,
    max_lines: usize,
    alignment: LabelAlignment,
    style: Style,
) {
    let lines = label_lines(title, area, max_lines);
    let top = centered_row(area, lines.len() as u32);
    for (row, line) in lines.iter().enumerate() {
        let width = display_width(line) as u32;
        let x = aligned_x(area, width, alignment);
        surface.draw_text(x, top + row as i32, line, style);
    }
}

/// Draw an image glyph on the middle row of `area`.
pub fn draw_image(surface: &mut Surface, area: Rect, glyph: &Glyph, fit: ImageFit, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let x = image_x(area, glyph.width(), fit);
    surface.draw_text(x, centered_row(area, 1), glyph.as_str(), style);
}

/// Draw a badge on the top row of `area`, in its trailing corner.
///
/// `mirrored` moves the badge to the left corner.
pub fn draw_badge(surface: &mut Surface, area: Rect, badge: &Badge, mirrored: bool) {
    let text = format!(" {} ", badge.label());
    let width = display_width(&text) as u32;
    if area.width < width || area.height == 0 {
        return;
    }
    let alignment = if mirrored {
        LabelAlignment::Left
    } else {
        LabelAlignment::Right
    };
    let x = aligned_x(area, width, alignment);
    let style = Style::fg(Rgba::WHITE).with_bg(badge.color).with_bold();
    surface.draw_text(x, area.y, &text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_x() {
        let area = Rect::new(10, 0, 10, 1);
        assert_eq!(aligned_x(area, 4, LabelAlignment::Left), 10);
        assert_eq!(aligned_x(area, 4, LabelAlignment::Center), 13);
        assert_eq!(aligned_x(area, 4, LabelAlignment::Right), 16);
        assert_eq!(aligned_x(area, 40, LabelAlignment::Right), 10);
    }

    #[test]
    fn test_label_lines_respect_rows() {
        let area = Rect::new(0, 0, 8, 1);
        assert_eq!(label_lines("Before extreme heat", area, 0), vec!["Before…"]);

        let area = Rect::new(0, 0, 8, 3);
        assert_eq!(label_lines("Before extreme heat", area, 0), vec!["Before", "extreme", "heat"]);
        assert_eq!(label_lines("Before extreme heat", area, 2), vec!["Before", "extreme…"]);
    }

    #[test]
    fn test_draw_label_centered() {
        let mut surface = Surface::new(10, 3);
        draw_label(
            &mut surface,
            Rect::new(0, 0, 10, 3),
            "Floods",
            0,
            LabelAlignment::Center,
            Style::NONE,
        );
        assert_eq!(surface.to_plain_lines(), vec!["", "  Floods", ""]);
    }

    #[test]
    fn test_badge_corner() {
        let mut surface = Surface::new(12, 1);
        let badge = Badge::new(120, Rgba::RED);
        draw_badge(&mut surface, Rect::new(0, 0, 12, 1), &badge, false);
        assert_eq!(surface.row_text(0), "        99+");
        assert_eq!(surface.get(11, 0).map(|c| c.bg), Some(Rgba::RED));

        let mut surface = Surface::new(12, 1);
        draw_badge(&mut surface, Rect::new(0, 0, 12, 1), &badge, true);
        assert_eq!(surface.row_text(0), " 99+");
    }

    #[test]
    fn test_badge_skipped_when_too_narrow() {
        let mut surface = Surface::new(3, 1);
        draw_badge(&mut surface, Rect::new(0, 0, 3, 1), &Badge::new(7, Rgba::RED), false);
        assert_eq!(surface.row_text(0), " 7");
        draw_badge(&mut surface, Rect::new(0, 0, 2, 1), &Badge::new(70, Rgba::RED), false);
        assert_eq!(surface.row_text(0), " 7");
    }
}
