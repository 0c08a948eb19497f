//! Segment content: title, image glyphs and badge.

use crate::color::Rgba;
use crate::unicode::display_width;

/// Counts above this display as `99+`.
pub const MAX_BADGE_COUNT: u32 = 99;

/// A short run of cells standing in for an image (usually one emoji).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph(Box<str>);

impl Glyph {
    #[must_use]
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display width in columns.
    #[must_use]
    pub fn width(&self) -> u32 {
        display_width(&self.0) as u32
    }
}

impl From<&str> for Glyph {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Counter shown in a segment's top trailing corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    pub count: u32,
    pub color: Rgba,
}

impl Badge {
    #[must_use]
    pub const fn new(count: u32, color: Rgba) -> Self {
        Self { count, color }
    }

    /// Text drawn for the badge.
    ///
    /// ```
    /// use segstrip::{Badge, Rgba};
    ///
    /// assert_eq!(Badge::new(7, Rgba::RED).label(), "7");
    /// assert_eq!(Badge::new(100, Rgba::RED).label(), "99+");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        if self.count > MAX_BADGE_COUNT {
            format!("{MAX_BADGE_COUNT}+")
        } else {
            self.count.to_string()
        }
    }
}

/// One selectable item. Identity is its position in the row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub title: Option<String>,
    pub image: Option<Glyph>,
    /// Image shown while selected; falls back to `image`.
    pub selected_image: Option<Glyph>,
    pub badge: Option<Badge>,
}

impl Segment {
    /// Segment with a title only.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Segment with an image only.
    #[must_use]
    pub fn with_image_only(image: impl Into<Glyph>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<Glyph>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_selected_image(mut self, image: impl Into<Glyph>) -> Self {
        self.selected_image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Title or the empty string.
    #[must_use]
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Image for the given selection state.
    #[must_use]
    pub fn image_for(&self, selected: bool) -> Option<&Glyph> {
        if selected {
            self.selected_image.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }

    /// Widest image this segment can show, in columns.
    #[must_use]
    pub fn image_width(&self) -> u32 {
        let plain = self.image.as_ref().map_or(0, Glyph::width);
        let selected = self.selected_image.as_ref().map_or(0, Glyph::width);
        plain.max(selected)
    }
}
