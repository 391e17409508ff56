//! Axis-aligned rectangles
//!
//! Everything that can touch anything in this game is an AABB in world
//! space: the bird, both halves of every pipe pair, and the power-up.

use glam::Vec2;

/// An axis-aligned rectangle, stored as top-left corner + size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner (y grows downward)
    pub min: Vec2,
    /// Width and height, both non-negative
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Build a rect from its center point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Move the rect so its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.min = center - self.size / 2.0;
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
    }

    /// True if the rects share any interior area. Rects that merely touch
    /// along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_round_trips() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.min, Vec2::new(90.0, 45.0));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 55.0);
    }

    #[test]
    fn overlapping_rects() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn disjoint_rects() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn edge_touching_is_not_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn set_center_moves_min() {
        let mut r = Rect::new(Vec2::ZERO, Vec2::new(4.0, 4.0));
        r.set_center(Vec2::new(10.0, 10.0));
        assert_eq!(r.min, Vec2::new(8.0, 8.0));
    }
}
