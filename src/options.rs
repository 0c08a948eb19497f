//! Control configuration.
//!
//! [`Options`] is an immutable value handed to
//! [`SegmentedControl::setup`](crate::SegmentedControl::setup); changing
//! any of it means calling `setup` again with a new value.
//!
//! ```
//! use segstrip::{LayoutMode, Options, Rgba};
//! use std::time::Duration;
//!
//! let options = Options::default()
//!     .with_layout(LayoutMode::Dynamic)
//!     .with_background(Rgba::WHITE)
//!     .with_animation_duration(Duration::from_millis(250));
//! assert!(options.validate().is_ok());
//! ```

use std::time::Duration;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::LayoutMode;
use crate::style::{Style, TextAttributes};

/// Which edges get a horizontal separator line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorKind {
    None,
    Top,
    Bottom,
    #[default]
    TopAndBottom,
}

impl SeparatorKind {
    #[must_use]
    pub fn has_top(self) -> bool {
        matches!(self, Self::Top | Self::TopAndBottom)
    }

    #[must_use]
    pub fn has_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::TopAndBottom)
    }
}

/// Lines above and/or below the segment row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalSeparator {
    pub kind: SeparatorKind,
    /// Rows per line.
    pub height: u32,
    pub color: Rgba,
}

impl Default for HorizontalSeparator {
    fn default() -> Self {
        Self {
            kind: SeparatorKind::TopAndBottom,
            height: 1,
            color: Rgba::DARK_GRAY,
        }
    }
}

/// Column drawn at the trailing edge of every segment but the last.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalSeparator {
    /// Fraction of the row height covered, centered vertically.
    pub ratio: f32,
    pub color: Rgba,
}

impl Default for VerticalSeparator {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            color: Rgba::DARK_GRAY,
        }
    }
}

/// Edge the indicator sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorEdge {
    Top,
    #[default]
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorOptions {
    pub edge: IndicatorEdge,
    /// Fraction of the segment width covered.
    pub ratio: f32,
    /// Rows.
    pub height: u32,
    pub color: Rgba,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            edge: IndicatorEdge::Bottom,
            ratio: 1.0,
            height: 1,
            color: Rgba::ORANGE,
        }
    }
}

/// Horizontal placement of an image inside its area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFit {
    #[default]
    Center,
    Start,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Look of a segment in one interaction state.
///
/// Terminals have no fonts; `attributes` carries the weight/slant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateStyle {
    pub background: Rgba,
    pub text_color: Rgba,
    pub attributes: TextAttributes,
    /// Multiplies the label alpha.
    pub alpha: f32,
}

impl Default for StateStyle {
    fn default() -> Self {
        Self {
            background: Rgba::TRANSPARENT,
            text_color: Rgba::BLACK,
            attributes: TextAttributes::empty(),
            alpha: 1.0,
        }
    }
}

impl StateStyle {
    /// Label style with alpha applied to the text color.
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::fg(self.text_color.multiply_alpha(self.alpha)).with_attributes(self.attributes)
    }
}

/// Which [`StateStyle`] applies to a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentState {
    Default,
    Selected,
    Highlighted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct States {
    pub default: StateStyle,
    pub selected: StateStyle,
    pub highlighted: StateStyle,
}

impl States {
    #[must_use]
    pub fn get(&self, state: SegmentState) -> &StateStyle {
        match state {
            SegmentState::Default => &self.default,
            SegmentState::Selected => &self.selected,
            SegmentState::Highlighted => &self.highlighted,
        }
    }
}

/// Full control configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub background: Rgba,
    pub layout: LayoutMode,
    /// When false, user scrolls are ignored; selection still scrolls into view.
    pub scroll_enabled: bool,
    pub horizontal_separator: Option<HorizontalSeparator>,
    pub vertical_separator: Option<VerticalSeparator>,
    pub indicator: Option<IndicatorOptions>,
    pub image_fit: ImageFit,
    pub label_alignment: LabelAlignment,
    /// Maximum label lines; 0 means as many as fit.
    pub label_lines: usize,
    pub states: States,
    pub animation_duration: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background: Rgba::LIGHT_GRAY,
            layout: LayoutMode::default(),
            scroll_enabled: true,
            horizontal_separator: Some(HorizontalSeparator::default()),
            vertical_separator: Some(VerticalSeparator::default()),
            indicator: Some(IndicatorOptions::default()),
            image_fit: ImageFit::Center,
            label_alignment: LabelAlignment::Center,
            label_lines: 0,
            states: States::default(),
            animation_duration: Duration::from_millis(100),
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_horizontal_separator(mut self, separator: Option<HorizontalSeparator>) -> Self {
        self.horizontal_separator = separator;
        self
    }

    #[must_use]
    pub fn with_vertical_separator(mut self, separator: Option<VerticalSeparator>) -> Self {
        self.vertical_separator = separator;
        self
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: Option<IndicatorOptions>) -> Self {
        self.indicator = indicator;
        self
    }

    #[must_use]
    pub fn with_image_fit(mut self, fit: ImageFit) -> Self {
        self.image_fit = fit;
        self
    }

    #[must_use]
    pub fn with_label_alignment(mut self, alignment: LabelAlignment) -> Self {
        self.label_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_label_lines(mut self, lines: usize) -> Self {
        self.label_lines = lines;
        self
    }

    #[must_use]
    pub fn with_states(mut self, states: States) -> Self {
        self.states = states;
        self
    }

    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Rows taken by the top separator.
    #[must_use]
    pub fn top_separator_rows(&self) -> u32 {
        self.horizontal_separator
            .filter(|sep| sep.kind.has_top())
            .map_or(0, |sep| sep.height)
    }

    /// Rows taken by the bottom separator.
    #[must_use]
    pub fn bottom_separator_rows(&self) -> u32 {
        self.horizontal_separator
            .filter(|sep| sep.kind.has_bottom())
            .map_or(0, |sep| sep.height)
    }

    /// Check ratios and counts are in range.
    pub fn validate(&self) -> Result<()> {
        if let LayoutMode::Fixed { max_visible: 0 } = self.layout {
            return Err(Error::InvalidOptions(
                "fixed layout needs at least one visible segment".to_string(),
            ));
        }
        if let Some(indicator) = &self.indicator {
            check_ratio("indicator ratio", indicator.ratio)?;
        }
        if let Some(separator) = &self.vertical_separator {
            check_ratio("vertical separator ratio", separator.ratio)?;
        }
        for (name, state) in [
            ("default", &self.states.default),
            ("selected", &self.states.selected),
            ("highlighted", &self.states.highlighted),
        ] {
            if !(0.0..=1.0).contains(&state.alpha) {
                return Err(Error::InvalidOptions(format!(
                    "{name} state alpha {} outside 0..=1",
                    state.alpha
                )));
            }
        }
        Ok(())
    }
}

fn check_ratio(name: &str, ratio: f32) -> Result<()> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(())
    } else {
        Err(Error::InvalidOptions(format!("{name} {ratio} outside 0..=1")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.background, Rgba::LIGHT_GRAY);
        assert_eq!(options.layout, LayoutMode::Fixed { max_visible: 4 });
        assert!(options.scroll_enabled);
        assert_eq!(options.indicator.map(|i| i.edge), Some(IndicatorEdge::Bottom));
        assert_eq!(options.indicator.map(|i| i.color), Some(Rgba::ORANGE));
        assert_eq!(options.top_separator_rows(), 1);
        assert_eq!(options.bottom_separator_rows(), 1);
        assert_eq!(options.label_lines, 0);
        assert_eq!(options.animation_duration, Duration::from_millis(100));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_separator_rows_follow_kind() {
        let options = Options::default().with_horizontal_separator(Some(HorizontalSeparator {
            kind: SeparatorKind::Bottom,
            height: 2,
            color: Rgba::BLACK,
        }));
        assert_eq!(options.top_separator_rows(), 0);
        assert_eq!(options.bottom_separator_rows(), 2);

        let options = options.with_horizontal_separator(None);
        assert_eq!(options.bottom_separator_rows(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let options = Options::default().with_indicator(Some(IndicatorOptions {
            ratio: 1.5,
            ..IndicatorOptions::default()
        }));
        let err = options.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(msg) if msg.contains("indicator ratio")));

        let options = Options::default().with_vertical_separator(Some(VerticalSeparator {
            ratio: f32::NAN,
            color: Rgba::BLACK,
        }));
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_visible() {
        let options = Options::default().with_layout(LayoutMode::Fixed { max_visible: 0 });
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_alpha() {
        let mut states = States::default();
        states.selected.alpha = -0.1;
        let options = Options::default().with_states(states);
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidOptions(msg)) if msg.starts_with("selected")
        ));
    }

    #[test]
    fn test_label_style_applies_alpha() {
        let state = StateStyle {
            alpha: 0.5,
            attributes: TextAttributes::BOLD,
            ..StateStyle::default()
        };
        let style = state.label_style();
        assert_eq!(style.fg.map(|c| c.a), Some(0.5));
        assert!(style.attributes.contains(TextAttributes::BOLD));
    }
}
