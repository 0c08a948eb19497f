//! How a segment arranges its image and label.
//!
//! Each [`LayoutStyle`] maps to a [`ContentStrategy`]: whether it shows
//! text and/or an image, the horizontal margin it reserves, and a function
//! that splits the segment's content area between image and label.

use crate::geometry::Rect;
use crate::segment::Segment;
use crate::unicode::display_width;

/// Margin around a label, in columns.
pub const TEXT_MARGIN: u32 = 4;
/// Margin around an image-only segment.
pub const IMAGE_MARGIN: u32 = 2;
/// Room for an image beside a label: a wide glyph plus a gap.
pub const SIDE_IMAGE_ALLOWANCE: u32 = 3;

/// Content arrangement of every segment in a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutStyle {
    #[default]
    OnlyLabel,
    OnlyImage,
    ImageOverLabel,
    ImageUnderLabel,
    ImageBeforeLabel,
    ImageAfterLabel,
}

impl LayoutStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::OnlyLabel,
        Self::OnlyImage,
        Self::ImageOverLabel,
        Self::ImageUnderLabel,
        Self::ImageBeforeLabel,
        Self::ImageAfterLabel,
    ];

    /// Name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OnlyLabel => "only-label",
            Self::OnlyImage => "only-image",
            Self::ImageOverLabel => "image-over-label",
            Self::ImageUnderLabel => "image-under-label",
            Self::ImageBeforeLabel => "image-before-label",
            Self::ImageAfterLabel => "image-after-label",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    /// Rendering strategy for this style.
    #[must_use]
    pub fn strategy(self) -> ContentStrategy {
        match self {
            Self::OnlyLabel => ContentStrategy {
                shows_text: true,
                shows_image: false,
                margin: TEXT_MARGIN,
                side_allowance: 0,
                arrange: arrange_label,
            },
            Self::OnlyImage => ContentStrategy {
                shows_text: false,
                shows_image: true,
                margin: IMAGE_MARGIN,
                side_allowance: 0,
                arrange: arrange_image,
            },
            Self::ImageOverLabel => ContentStrategy {
                shows_text: true,
                shows_image: true,
                margin: TEXT_MARGIN,
                side_allowance: 0,
                arrange: arrange_image_over,
            },
            Self::ImageUnderLabel => ContentStrategy {
                shows_text: true,
                shows_image: true,
                margin: TEXT_MARGIN,
                side_allowance: 0,
                arrange: arrange_image_under,
            },
            Self::ImageBeforeLabel => ContentStrategy {
                shows_text: true,
                shows_image: true,
                margin: TEXT_MARGIN,
                side_allowance: SIDE_IMAGE_ALLOWANCE,
                arrange: arrange_image_before,
            },
            Self::ImageAfterLabel => ContentStrategy {
                shows_text: true,
                shows_image: true,
                margin: TEXT_MARGIN,
                side_allowance: SIDE_IMAGE_ALLOWANCE,
                arrange: arrange_image_after,
            },
        }
    }
}

/// Where the image and label go inside a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arrangement {
    pub image: Option<Rect>,
    pub label: Option<Rect>,
}

/// Splits a content rect given the image width in columns.
pub type ArrangeFn = fn(area: Rect, image_width: u32) -> Arrangement;

/// Per-style behavior, selected by [`LayoutStyle::strategy`].
#[derive(Clone, Copy, Debug)]
pub struct ContentStrategy {
    pub shows_text: bool,
    pub shows_image: bool,
    pub margin: u32,
    /// Extra columns for an image placed beside the label.
    pub side_allowance: u32,
    pub arrange: ArrangeFn,
}

impl ContentStrategy {
    /// Width a segment needs before any stretching.
    ///
    /// Empty segments still reserve the margin.
    #[must_use]
    pub fn intrinsic_width(&self, segment: &Segment) -> u32 {
        let content = if self.shows_text {
            display_width(segment.title_str()) as u32
        } else {
            segment.image_width()
        };
        content
            .saturating_add(self.margin)
            .saturating_add(self.side_allowance)
    }

    #[must_use]
    pub fn arrange(&self, area: Rect, image_width: u32) -> Arrangement {
        (self.arrange)(area, image_width)
    }
}

fn arrange_label(area: Rect, _image_width: u32) -> Arrangement {
    Arrangement {
        image: None,
        label: Some(area),
    }
}

fn arrange_image(area: Rect, _image_width: u32) -> Arrangement {
    Arrangement {
        image: Some(area),
        label: None,
    }
}

fn arrange_image_over(area: Rect, image_width: u32) -> Arrangement {
    if area.height < 2 {
        return arrange_image_before(area, image_width);
    }
    Arrangement {
        image: Some(Rect::new(area.x, area.y, area.width, 1)),
        label: Some(Rect::new(area.x, area.y + 1, area.width, area.height - 1)),
    }
}

fn arrange_image_under(area: Rect, image_width: u32) -> Arrangement {
    if area.height < 2 {
        return arrange_image_after(area, image_width);
    }
    let image_row = area.y.saturating_add_unsigned(area.height - 1);
    Arrangement {
        image: Some(Rect::new(area.x, image_row, area.width, 1)),
        label: Some(Rect::new(area.x, area.y, area.width, area.height - 1)),
    }
}

/// Image column block including the gap after it.
fn side_block(area: Rect, image_width: u32) -> u32 {
    image_width.saturating_add(1).min(area.width)
}

fn arrange_image_before(area: Rect, image_width: u32) -> Arrangement {
    let block = side_block(area, image_width);
    let pad = IMAGE_MARGIN / 2;
    let image_x = area.x.saturating_add_unsigned(pad.min(area.width - block));
    let label_x = image_x.saturating_add_unsigned(block);
    Arrangement {
        image: Some(Rect::new(image_x, area.y, image_width.min(area.width), area.height)),
        label: Some(Rect::new(
            label_x,
            area.y,
            area.right().saturating_sub(label_x).max(0) as u32,
            area.height,
        )),
    }
}

fn arrange_image_after(area: Rect, image_width: u32) -> Arrangement {
    let block = side_block(area, image_width);
    let pad = IMAGE_MARGIN / 2;
    let image_x = area.right() - pad.min(area.width - block) as i32 - image_width.min(area.width) as i32;
    let label_end = image_x - 1;
    Arrangement {
        image: Some(Rect::new(image_x, area.y, image_width.min(area.width), area.height)),
        label: Some(Rect::new(
            area.x,
            area.y,
            label_end.saturating_sub(area.x).max(0) as u32,
            area.height,
        )),
    }
}
