//! Clipping rectangles for drawing a scrolled segment row.

/// A clipping rectangle in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ClipRect {
    /// Create a new clipping rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle that clips nothing.
    pub const UNBOUNDED: Self = Self::new(i32::MIN / 2, i32::MIN / 2, u32::MAX, u32::MAX);

    fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    /// Intersection with another rectangle; zero-sized when disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Self::new(x1, y1, x2.abs_diff(x1), y2.abs_diff(y1))
        } else {
            Self::new(x1, y1, 0, 0)
        }
    }

    /// Check if this rectangle has zero area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Stack of nested clip rectangles; the effective clip is their intersection.
#[derive(Clone, Debug, Default)]
pub struct ClipStack {
    saved: Vec<ClipRect>,
    current: ClipRect,
}

impl ClipStack {
    /// Push a rectangle, intersecting with the current clip.
    pub fn push(&mut self, rect: ClipRect) {
        self.saved.push(self.current);
        self.current = self.current.intersect(&rect);
    }

    /// Restore the clip that was active before the last push.
    pub fn pop(&mut self) {
        if let Some(rect) = self.saved.pop() {
            self.current = rect;
        }
    }

    /// Current effective clip.
    #[must_use]
    pub fn current(&self) -> ClipRect {
        self.current
    }

    /// Check if a point survives the current clip.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.current.contains(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = ClipRect::new(10, 2, 5, 1);
        assert!(rect.contains(10, 2));
        assert!(rect.contains(14, 2));
        assert!(!rect.contains(15, 2));
        assert!(!rect.contains(10, 3));
        assert!(!rect.contains(9, 2));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = ClipRect::new(0, 0, 5, 5);
        let b = ClipRect::new(10, 10, 5, 5);
        assert!(a.intersect(&b).is_empty());
        assert_eq!(a.intersect(&ClipRect::new(3, -2, 10, 4)), ClipRect::new(3, 0, 2, 2));
    }

    #[test]
    fn test_stack_nesting() {
        let mut stack = ClipStack::default();
        assert!(stack.contains(-1000, 1000));
        stack.push(ClipRect::new(0, 0, 20, 3));
        stack.push(ClipRect::new(10, 1, 20, 1));
        assert_eq!(stack.current(), ClipRect::new(10, 1, 10, 1));
        stack.pop();
        assert!(stack.contains(0, 0));
        stack.pop();
        stack.pop();
        assert_eq!(stack.current(), ClipRect::UNBOUNDED);
    }
}
