//! Unicode utilities for measuring, wrapping and ordering segment labels.

mod bidi;
mod width;
mod wrap;

pub use bidi::{Direction, base_direction, visual_order};
pub use width::{
    WidthMethod, display_width, display_width_with_method, grapheme_width, graphemes,
    set_width_method, truncate_to_width, width_method,
};
pub use wrap::wrap_label;
