//! Bidirectional text handling for right-to-left labels.
//!
//! Terminals draw cells strictly left to right, so Hebrew or Arabic titles
//! must be reordered into visual order before they reach the surface.

use unicode_bidi::{BidiClass, BidiInfo};

/// Base paragraph direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
    /// No strong direction could be determined.
    Neutral,
}

/// Direction of the first strong character in `text` (UAX #9 rules P2/P3).
#[must_use]
pub fn base_direction(text: &str) -> Direction {
    for ch in text.chars() {
        match unicode_bidi::bidi_class(ch) {
            BidiClass::L => return Direction::Ltr,
            BidiClass::R | BidiClass::AL => return Direction::Rtl,
            _ => {}
        }
    }
    Direction::Neutral
}

/// Reorder `text` from logical into visual (display) order.
///
/// Pure left-to-right text is returned unchanged.
#[must_use]
pub fn visual_order(text: &str) -> String {
    if text.chars().all(|ch| {
        !matches!(
            unicode_bidi::bidi_class(ch),
            BidiClass::R | BidiClass::AL | BidiClass::AN | BidiClass::RLE | BidiClass::RLO | BidiClass::RLI
        )
    }) {
        return text.to_string();
    }

    let info = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());
    for paragraph in &info.paragraphs {
        let line = paragraph.range.clone();
        out.push_str(&info.reorder_line(paragraph, line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_direction_detects_scripts() {
        assert_eq!(base_direction(""), Direction::Neutral);
        assert_eq!(base_direction("12345"), Direction::Neutral);
        assert_eq!(base_direction("Floods"), Direction::Ltr);
        assert_eq!(base_direction("שלום"), Direction::Rtl);
        assert_eq!(base_direction("123 שלום abc"), Direction::Rtl);
    }

    #[test]
    fn visual_order_keeps_ltr_text() {
        assert_eq!(visual_order("Extreme heat"), "Extreme heat");
    }

    #[test]
    fn visual_order_reverses_hebrew() {
        assert_eq!(visual_order("שלום"), "םולש");
    }

    #[test]
    fn visual_order_preserves_length() {
        let text = "Hi שלום 42";
        let visual = visual_order(text);
        assert_eq!(visual.chars().count(), text.chars().count());
    }
}
