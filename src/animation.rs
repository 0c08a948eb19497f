//! Time-driven transitions for the indicator, selection layer and scroll.
//!
//! Nothing here owns a clock: the host calls
//! [`SegmentedControl::advance`](crate::SegmentedControl::advance) with the
//! time since the last frame and each transition moves linearly toward its
//! target.

use std::time::Duration;

use crate::geometry::Span;

/// Values a [`Transition`] can interpolate.
pub trait Lerp: Copy {
    /// Value at `t` in `0.0..=1.0` between `from` and `to`.
    fn lerp(from: Self, to: Self, t: f64) -> Self;
}

impl Lerp for i32 {
    fn lerp(from: Self, to: Self, t: f64) -> Self {
        let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
        value.round() as Self
    }
}

impl Lerp for Span {
    fn lerp(from: Self, to: Self, t: f64) -> Self {
        Self::new(i32::lerp(from.start, to.start, t), i32::lerp(from.end, to.end, t))
    }
}

/// A linear move from one value to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
}

impl<T: Lerp> Transition<T> {
    #[must_use]
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Move time forward; returns true once finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.is_finished()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction completed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            self.to
        } else {
            T::lerp(self.from, self.to, self.progress())
        }
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }
}

/// A horizontal shape whose path can snap or animate.
///
/// `path` is the model value, the one the shape ends up at; `presented`
/// is what should be drawn this frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeLayer {
    path: Option<Span>,
    transition: Option<Transition<Span>>,
}

impl ShapeLayer {
    #[must_use]
    pub fn path(&self) -> Option<Span> {
        self.path
    }

    /// Span to draw right now.
    #[must_use]
    pub fn presented(&self) -> Option<Span> {
        self.transition.as_ref().map(Transition::value).or(self.path)
    }

    /// Replace the path without animating.
    pub fn set_path(&mut self, span: Span) {
        self.transition = None;
        self.path = Some(span);
    }

    /// Animate from the presented span to `span`.
    ///
    /// A shape that has never been placed snaps instead.
    pub fn animate_to(&mut self, span: Span, duration: Duration) {
        match self.presented() {
            Some(from) if !duration.is_zero() => {
                self.transition = Some(Transition::new(from, span, duration));
            }
            _ => self.transition = None,
        }
        self.path = Some(span);
    }

    /// Returns true while a transition is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if let Some(transition) = &mut self.transition {
            if transition.advance(dt) {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn clear(&mut self) {
        self.path = None;
        self.transition = None;
    }
}
