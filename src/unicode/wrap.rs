//! Greedy word wrapping for multi-line segment labels.

use super::width::{display_width, grapheme_width, graphemes, truncate_to_width};

/// Wrap `text` into lines no wider than `width` columns.
///
/// `max_lines == 0` means no limit. When the text needs more lines than
/// allowed, the last kept line is truncated with `…`.
#[must_use]
pub fn wrap_label(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        let gap = usize::from(!current.is_empty());

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-break words wider than the line.
        for g in graphemes(word) {
            let w = grapheme_width(g);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(g);
            current_width += w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if max_lines > 0 && lines.len() > max_lines {
        let rest = lines[max_lines - 1..].join(" ");
        lines.truncate(max_lines - 1);
        lines.push(truncate_to_width(&rest, width));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_when_it_fits() {
        assert_eq!(wrap_label("Extreme heat", 20, 0), vec!["Extreme heat"]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_label("Extreme heat", 8, 0), vec!["Extreme", "heat"]);
    }

    #[test]
    fn hard_breaks_long_words() {
        assert_eq!(wrap_label("Earthquakes", 5, 0), vec!["Earth", "quake", "s"]);
    }

    #[test]
    fn truncates_past_line_limit() {
        assert_eq!(
            wrap_label("Before extreme heat", 8, 2),
            vec!["Before", "extreme…"]
        );
        assert_eq!(wrap_label("Earthquakes", 5, 1), vec!["Eart…"]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(wrap_label("", 10, 0).is_empty());
        assert!(wrap_label("text", 0, 0).is_empty());
        assert!(wrap_label("   ", 4, 0).is_empty());
    }
}
