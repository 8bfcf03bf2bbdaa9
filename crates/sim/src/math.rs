//! 2D vector and overlap primitives shared by every hit test in the core.
//!
//! Overlap is strict on every axis: two shapes that only share a boundary
//! (zero-area intersection) do not count as overlapping.

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector, or zero when the vector has no length.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    pub fn distance_to(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle of the vector from `self` to `target`, in radians.
    pub fn angle_to(self, target: Vec2) -> f32 {
        (target.y - self.y).atan2(target.x - self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn overlaps(self, other: Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn overlaps_circle(self, circle: Circle) -> bool {
        let nearest_x = circle.center.x.clamp(self.x, self.x + self.w);
        let nearest_y = circle.center.y.clamp(self.y, self.y + self.h);
        let nearest = Vec2::new(nearest_x, nearest_y);
        (circle.center - nearest).length_squared() < circle.radius * circle.radius
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn overlaps(self, other: Circle) -> bool {
        let combined = self.radius + other.radius;
        (other.center - self.center).length_squared() < combined * combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_zero_vector_stays_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec2::new(3.0, -4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rect_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
    }

    #[test]
    fn rect_sharing_only_an_edge_does_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(right));
        assert!(!a.overlaps(below));
    }

    #[test]
    fn rect_sharing_only_a_corner_does_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(b));
    }

    #[test]
    fn circle_overlap_is_strict_at_touching_distance() {
        let a = Circle::new(Vec2::ZERO, 5.0);
        let touching = Circle::new(Vec2::new(10.0, 0.0), 5.0);
        let closer = Circle::new(Vec2::new(9.9, 0.0), 5.0);
        assert!(!a.overlaps(touching));
        assert!(a.overlaps(closer));
    }

    #[test]
    fn rect_circle_overlap_uses_closest_point() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.overlaps_circle(Circle::new(Vec2::new(12.0, 5.0), 3.0)));
        assert!(!rect.overlaps_circle(Circle::new(Vec2::new(13.1, 5.0), 3.0)));
        // Touching exactly is not overlap.
        assert!(!rect.overlaps_circle(Circle::new(Vec2::new(13.0, 5.0), 3.0)));
    }

    #[test]
    fn angle_to_points_toward_target() {
        let a = Vec2::ZERO;
        let angle = a.angle_to(Vec2::new(0.0, 5.0));
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
