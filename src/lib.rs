//! `segstrip` - segmented control for terminal UIs
//!
//! A horizontal strip of tappable segments with a sliding indicator and
//! selection background. Segment widths, scroll offsets and indicator
//! spans are computed in terminal columns by [`geometry`]; the
//! [`SegmentedControl`] owns selection, badges and animation state, and
//! [`render`] paints it into a [`Surface`] that [`AnsiWriter`] can emit.
//!
//! ```
//! use segstrip::{LayoutStyle, Options, Segment, SegmentedControl, Surface, ViewportState};
//!
//! let segments = vec![Segment::new("One"), Segment::new("Two")];
//! let mut control = SegmentedControl::with_content(segments, LayoutStyle::OnlyLabel, Options::default())?;
//! control.on_viewport_change(ViewportState::new(20, 3));
//! control.set_selected_index(1)?;
//!
//! let mut surface = Surface::new(20, 3);
//! segstrip::render::draw(&control, &mut surface, 0, 0);
//! # Ok::<(), segstrip::Error>(())
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow cell::CellContent etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::float_cmp)] // Ratios and alphas compare exactly in tests

pub mod animation;
pub mod ansi;
pub mod cell;
pub mod color;
pub mod content;
pub mod control;
pub mod error;
pub mod event;
pub mod geometry;
pub mod list;
pub mod options;
pub mod render;
pub mod segment;
pub mod style;
pub mod surface;
pub mod unicode;

// Re-export core types at crate root
pub use cell::{Cell, CellContent};
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use style::{Style, TextAttributes};

// Re-export the control and its configuration
pub use content::{ContentStrategy, LayoutStyle};
pub use control::{ChangeCallback, SegmentedControl};
pub use list::{SegmentList, SegmentView};
pub use options::{
    HorizontalSeparator, ImageFit, IndicatorEdge, IndicatorOptions, LabelAlignment, Options,
    SegmentState, SeparatorKind, StateStyle, States, VerticalSeparator,
};
pub use segment::{Badge, Glyph, Segment};

// Re-export geometry types
pub use geometry::{Insets, LayoutMode, Rect, Span, ViewportState};

// Re-export output types
pub use ansi::{AnsiWriter, ColorMode};
pub use surface::{ClipRect, Surface};
pub use unicode::{WidthMethod, set_width_method};
