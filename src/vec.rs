//! Planar vector used for joint positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector. Screen-space convention: `y` grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.dot(self).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> F {
        (other - self).length()
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// length is exactly zero.
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > F::zero() {
            Vec2 { x: self.x / len, y: self.y / len }
        } else {
            Self::zero()
        }
    }
}

/// Euclidean distance between `p1` and `p2`. Returns 0 for coincident points.
pub fn distance<F: Float>(p1: Vec2<F>, p2: Vec2<F>) -> F {
    p1.distance(p2)
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_points_have_zero_distance() {
        let p = Vec2::new(12.5f64, -4.0);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f32>::zero();
        assert_eq!(v.normalize_or_zero(), Vec2::zero());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2::new(0.0f32, -7.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn assign_operators() {
        let mut v = Vec2::new(1.0f32, 2.0);
        v += Vec2::new(0.5, 0.5);
        v -= Vec2::new(1.0, 0.0);
        assert_eq!(v, Vec2::new(0.5, 2.5));
        assert_eq!(-v, Vec2::new(-0.5, -2.5));
    }
}
