//! The segmented control state machine.
//!
//! [`SegmentedControl`] owns the segments, options, selection and the two
//! animated shapes (indicator and selection background). The host drives
//! it with viewport changes, scroll deltas, pointer columns and elapsed
//! time; [`render::draw`](crate::render::draw) paints it.
//!
//! ```
//! use segstrip::{LayoutStyle, Options, Segment, SegmentedControl, ViewportState};
//! use std::time::Duration;
//!
//! let mut control = SegmentedControl::new();
//! control
//!     .setup(
//!         vec![Segment::new("One"), Segment::new("Two"), Segment::new("Three")],
//!         LayoutStyle::OnlyLabel,
//!         Options::default(),
//!     )
//!     .unwrap();
//! control.on_viewport_change(ViewportState::new(30, 3));
//!
//! assert!(control.set_selected_index(1).unwrap());
//! assert!(control.is_animating());
//! control.advance(Duration::from_secs(1));
//! assert!(!control.is_animating());
//! assert_eq!(control.selected_index(), Some(1));
//! ```

use std::fmt;
use std::ops::Range;
use std::time::Duration;

use crate::animation::{ShapeLayer, Transition};
use crate::color::Rgba;
use crate::content::LayoutStyle;
use crate::error::{Result, check_index};
use crate::event::{EVENT_BADGE, EVENT_SELECTED, EVENT_SETTLED, LogLevel, emit_event, emit_log};
use crate::geometry::scroll::{clamp_offset, scroll_into_view};
use crate::geometry::{PlanInput, Rect, Span, ViewportState, plan, resolve, segment_widths, track};
use crate::options::{Options, SegmentState};
use crate::segment::{Badge, Segment};

/// Called once per actual change of the selected index.
pub type ChangeCallback = Box<dyn FnMut(&SegmentedControl, usize) + Send>;

/// A horizontal strip of selectable segments.
pub struct SegmentedControl {
    segments: Vec<Segment>,
    style: LayoutStyle,
    options: Options,
    viewport: Option<ViewportState>,
    widths: Vec<u32>,
    selected: Option<usize>,
    highlighted: Option<usize>,
    indicator: ShapeLayer,
    selection: ShapeLayer,
    scroll: Option<Transition<i32>>,
    in_flight: bool,
    interaction_enabled: bool,
    reload_generation: u64,
    on_change: Option<ChangeCallback>,
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SegmentedControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedControl")
            .field("segments", &self.segments.len())
            .field("style", &self.style)
            .field("viewport", &self.viewport)
            .field("selected", &self.selected)
            .field("in_flight", &self.in_flight)
            .field("reload_generation", &self.reload_generation)
            .finish_non_exhaustive()
    }
}

impl SegmentedControl {
    /// Empty control with default options and no viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            style: LayoutStyle::default(),
            options: Options::default(),
            viewport: None,
            widths: Vec::new(),
            selected: None,
            highlighted: None,
            indicator: ShapeLayer::default(),
            selection: ShapeLayer::default(),
            scroll: None,
            in_flight: false,
            interaction_enabled: true,
            reload_generation: 0,
            on_change: None,
        }
    }

    /// Build a control and run [`setup`](Self::setup) on it.
    pub fn with_content(segments: Vec<Segment>, style: LayoutStyle, options: Options) -> Result<Self> {
        let mut control = Self::new();
        control.setup(segments, style, options)?;
        Ok(control)
    }

    /// Replace content and options wholesale.
    ///
    /// Invalid options are rejected before anything changes. A selection
    /// that no longer fits the new content is reset to `None`; a valid one
    /// is kept and snapped into view.
    pub fn setup(&mut self, segments: Vec<Segment>, style: LayoutStyle, options: Options) -> Result<()> {
        options.validate()?;

        self.segments = segments;
        self.style = style;
        self.options = options;
        self.highlighted = None;
        self.cancel_transitions();

        if let Some(index) = self.selected {
            if index >= self.segments.len() {
                emit_log(
                    LogLevel::Warn,
                    &format!(
                        "segment selection reset: index {index} out of range for {} segments",
                        self.segments.len()
                    ),
                );
                self.selected = None;
            }
        }

        self.reload();
        self.place_selection();
        emit_log(
            LogLevel::Debug,
            &format!("segment control setup: {} segments, {:?}", self.segments.len(), style),
        );
        Ok(())
    }

    /// Tell the control its visible area changed.
    ///
    /// A new size, inset or direction re-centers the selection; a pure
    /// offset change behaves like a scroll.
    pub fn on_viewport_change(&mut self, state: ViewportState) {
        let relayout = self.viewport.is_none_or(|old| {
            old.width != state.width || old.insets != state.insets || old.mirrored != state.mirrored
        });

        self.cancel_transitions();
        self.viewport = Some(state);
        self.reload();

        if relayout {
            self.place_selection();
        } else {
            self.set_offset(state.scroll_offset);
            self.sync_to_scroll();
        }
    }

    /// Register the selection change callback, replacing any previous one.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&SegmentedControl, usize) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Remove the selection change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select `index`, animating the indicator and scrolling it into view.
    ///
    /// Returns `Ok(false)` without side effects when `index` is already
    /// selected.
    pub fn set_selected_index(&mut self, index: usize) -> Result<bool> {
        check_index(index, self.segments.len())?;
        if self.selected == Some(index) {
            return Ok(false);
        }

        self.selected = Some(index);
        self.reload();
        self.move_to_selection();

        emit_log(LogLevel::Debug, &format!("segment selected: {index}"));
        emit_event(EVENT_SELECTED, &format!("{{\"index\":{index}}}"));
        self.notify_change(index);
        Ok(true)
    }

    /// Attach a badge to segment `index`.
    pub fn add_badge(&mut self, index: usize, count: u32, color: Rgba) -> Result<()> {
        check_index(index, self.segments.len())?;
        self.segments[index].badge = Some(Badge::new(count, color));
        self.reload();
        emit_event(EVENT_BADGE, &format!("{{\"index\":{index},\"count\":{count}}}"));
        Ok(())
    }

    /// Remove the badge from segment `index`, if any.
    pub fn remove_badge(&mut self, index: usize) -> Result<()> {
        check_index(index, self.segments.len())?;
        self.segments[index].badge = None;
        self.reload();
        emit_event(EVENT_BADGE, &format!("{{\"index\":{index},\"count\":null}}"));
        Ok(())
    }

    /// Scroll to an absolute offset; returns the clamped offset.
    ///
    /// Ignored when scrolling is disabled. Cancels a pending
    /// scroll-into-view; running shape animations are re-aimed at the
    /// selected segment at the new offset.
    pub fn scroll_to(&mut self, offset: i32) -> i32 {
        if !self.options.scroll_enabled || self.viewport.is_none() {
            return self.scroll_offset();
        }
        if self.scroll.take().is_some() {
            self.check_settled();
        }
        self.set_offset(offset);
        if self.in_flight {
            self.retarget_in_flight();
        } else {
            self.sync_to_scroll();
        }
        self.scroll_offset()
    }

    /// Scroll by a relative amount; returns the clamped offset.
    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        let target = self.scroll_offset().saturating_add(delta);
        self.scroll_to(target)
    }

    /// Move animations forward by `dt`. Returns true while still in flight.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.in_flight {
            return false;
        }
        self.indicator.advance(dt);
        self.selection.advance(dt);
        if let Some(scroll) = &mut self.scroll {
            let done = scroll.advance(dt);
            let offset = scroll.value();
            if let Some(viewport) = &mut self.viewport {
                viewport.scroll_offset = offset;
            }
            if done {
                self.scroll = None;
            }
        }
        self.check_settled();
        self.in_flight
    }

    /// True while an animated move owns the shapes.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight
    }

    /// Pointer input is ignored while a move is in flight.
    #[must_use]
    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Segment under a physical column of the viewport.
    #[must_use]
    pub fn segment_at(&self, column: i32) -> Option<usize> {
        let viewport = self.viewport?;
        if column < 0 || column >= viewport.width_i32() {
            return None;
        }
        let x = viewport.logical_column(column);
        (0..self.widths.len()).find(|&index| self.item_rect(index).is_some_and(|rect| rect.contains_x(x)))
    }

    /// Select the segment under `column`; returns the hit index.
    pub fn tap(&mut self, column: i32) -> Option<usize> {
        if !self.interaction_enabled {
            return None;
        }
        let index = self.segment_at(column)?;
        self.highlighted = None;
        self.set_selected_index(index).ok().map(|_| index)
    }

    /// Mark the segment under `column` as highlighted (pressed).
    pub fn highlight_at(&mut self, column: i32) -> Option<usize> {
        if !self.interaction_enabled {
            return None;
        }
        self.highlighted = self.segment_at(column);
        self.highlighted
    }

    /// Drop the highlighted (pressed) state.
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn style(&self) -> LayoutStyle {
        self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&ViewportState> {
        self.viewport.as_ref()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> i32 {
        self.viewport.map_or(0, |viewport| viewport.scroll_offset)
    }

    /// Current segment widths; empty until laid out.
    #[must_use]
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Bumped on every reload (setup, layout, selection, badge change).
    #[must_use]
    pub fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    /// Logical rectangle of segment `index` at the current offset.
    #[must_use]
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        let viewport = self.viewport.as_ref()?;
        resolve(index, &self.widths, self.options.layout, viewport)
    }

    /// Indices of segments at least partly inside the viewport.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let Some(viewport) = self.viewport else {
            return 0..0;
        };
        let visible = |index: &usize| {
            self.item_rect(*index)
                .is_some_and(|rect| rect.width > 0 && rect.right() > 0 && rect.x < viewport.width_i32())
        };
        let mut indices = (0..self.widths.len()).filter(visible);
        match indices.next() {
            Some(first) => first..indices.last().unwrap_or(first) + 1,
            None => 0..0,
        }
    }

    /// Which state style applies to segment `index`.
    #[must_use]
    pub fn segment_state(&self, index: usize) -> SegmentState {
        if self.highlighted == Some(index) {
            SegmentState::Highlighted
        } else if self.selected == Some(index) {
            SegmentState::Selected
        } else {
            SegmentState::Default
        }
    }

    /// Indicator columns to draw this frame, in logical order.
    #[must_use]
    pub fn indicator_span(&self) -> Option<Span> {
        self.options.indicator.and(self.indicator.presented())
    }

    /// Where the indicator is headed.
    #[must_use]
    pub fn indicator_target(&self) -> Option<Span> {
        self.options.indicator.and(self.indicator.path())
    }

    /// Selection background columns to draw this frame.
    #[must_use]
    pub fn selection_span(&self) -> Option<Span> {
        self.selection.presented()
    }

    fn reload(&mut self) {
        let strategy = self.style.strategy();
        let intrinsic: Vec<u32> = self
            .segments
            .iter()
            .map(|segment| strategy.intrinsic_width(segment))
            .collect();
        let viewport_width = self.viewport.map_or(0, |viewport| viewport.width);
        self.widths = segment_widths(self.options.layout, &intrinsic, viewport_width);
        self.reload_generation = self.reload_generation.wrapping_add(1);
    }

    /// The viewport with insets the layout mode actually uses.
    fn layout_viewport(&self) -> Option<ViewportState> {
        self.viewport.map(|viewport| viewport.for_layout(self.options.layout))
    }

    fn set_offset(&mut self, offset: i32) {
        let Some(layout) = self.layout_viewport() else {
            return;
        };
        let clamped = clamp_offset(offset, &self.widths, &layout);
        if let Some(viewport) = &mut self.viewport {
            viewport.scroll_offset = clamped;
        }
    }

    fn indicator_ratio(&self) -> f32 {
        self.options.indicator.map_or(1.0, |indicator| indicator.ratio)
    }

    /// Planned spans (indicator, selection) for `index` at `offset`.
    fn plan_spans(&self, index: usize, offset: i32) -> Option<(Span, Span)> {
        let viewport = self.layout_viewport()?.with_scroll_offset(offset);
        let item = resolve(index, &self.widths, self.options.layout, &viewport)?;
        let input = PlanInput {
            item,
            ratio: self.indicator_ratio(),
            viewport_width: viewport.width,
            insets: viewport.insets,
            mirrored: viewport.mirrored,
            selected: index,
            widths: &self.widths,
            mode: self.options.layout,
        };
        let indicator = plan(&input);
        let selection = plan(&PlanInput { ratio: 1.0, ..input });
        Some((indicator, selection))
    }

    /// Target offset that brings `index` into view.
    fn target_offset(&self, index: usize) -> Option<i32> {
        let viewport = self.layout_viewport()?;
        Some(scroll_into_view(index, &self.widths, &viewport))
    }

    /// Animated move to the current selection.
    fn move_to_selection(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(target) = self.target_offset(index) else {
            return;
        };
        let Some((indicator, selection)) = self.plan_spans(index, target) else {
            return;
        };

        let duration = self.options.animation_duration;
        self.indicator.animate_to(indicator, duration);
        self.selection.animate_to(selection, duration);

        let current = self.scroll_offset();
        if current == target || duration.is_zero() {
            self.scroll = None;
            self.set_offset(target);
        } else {
            self.scroll = Some(Transition::new(current, target, duration));
        }

        self.in_flight = self.indicator.is_animating() || self.selection.is_animating() || self.scroll.is_some();
        self.interaction_enabled = !self.in_flight;
    }

    /// Snap the selection into view without animating.
    fn place_selection(&mut self) {
        let Some(index) = self.selected else {
            self.indicator.clear();
            self.selection.clear();
            let offset = self.scroll_offset();
            self.set_offset(offset);
            return;
        };
        let Some(target) = self.target_offset(index) else {
            return;
        };
        self.set_offset(target);
        if let Some((indicator, selection)) = self.plan_spans(index, target) {
            self.indicator.set_path(indicator);
            self.selection.set_path(selection);
        }
    }

    /// Spans (indicator, selection) that follow the selected segment at the
    /// current offset.
    fn tracking_spans(&self) -> Option<(Span, Span)> {
        let index = self.selected?;
        let item = self.item_rect(index)?;
        let is_last = index + 1 == self.widths.len();
        Some((track(&item, self.indicator_ratio(), is_last), track(&item, 1.0, is_last)))
    }

    /// Keep the shapes glued to the selected segment while scrolling.
    fn sync_to_scroll(&mut self) {
        if self.in_flight {
            return;
        }
        if let Some((indicator, selection)) = self.tracking_spans() {
            self.indicator.set_path(indicator);
            self.selection.set_path(selection);
        }
    }

    /// A user scroll moved the segment under a running move; aim the
    /// shapes at where it is now.
    fn retarget_in_flight(&mut self) {
        let Some((indicator, selection)) = self.tracking_spans() else {
            return;
        };
        let duration = self.options.animation_duration;
        self.indicator.animate_to(indicator, duration);
        self.selection.animate_to(selection, duration);
    }

    fn check_settled(&mut self) {
        if self.in_flight && !self.indicator.is_animating() && !self.selection.is_animating() && self.scroll.is_none() {
            self.in_flight = false;
            self.interaction_enabled = true;
            let index = self.selected.map_or_else(|| "null".to_string(), |index| index.to_string());
            emit_event(EVENT_SETTLED, &format!("{{\"index\":{index}}}"));
        }
    }

    /// Drop every running transition and jump to its end.
    fn cancel_transitions(&mut self) {
        if let Some(path) = self.indicator.path() {
            self.indicator.set_path(path);
        }
        if let Some(path) = self.selection.path() {
            self.selection.set_path(path);
        }
        if let Some(scroll) = self.scroll.take() {
            let target = scroll.target();
            self.set_offset(target);
        }
        self.in_flight = false;
        self.interaction_enabled = true;
    }

    fn notify_change(&mut self, index: usize) {
        if let Some(mut callback) = self.on_change.take() {
            callback(self, index);
            self.on_change = Some(callback);
        }
    }
}
