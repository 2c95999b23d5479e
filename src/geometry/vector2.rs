//! Two-dimensional `f32` vector.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Magnitude below which [`Vector2::normalize`] collapses to zero.
pub(crate) const NORMALIZE_EPSILON: f32 = 1e-5;

/// Squared distance below which two vectors are [`approx_eq`](Vector2::approx_eq).
pub(crate) const APPROX_EQ_SQR_EPSILON: f32 = 1e-10;

/// A 2D vector (or point) with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// Both components `+inf`.
    pub const POSITIVE_INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);
    /// Both components `-inf`.
    pub const NEGATIVE_INFINITY: Self = Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Overwrite both components.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Euclidean length, accumulated in `f64`.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        f64::from(self.sqr_magnitude()).sqrt() as f32
    }

    /// Squared length, accumulated in `f64`.
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        (x * x + y * y) as f32
    }

    /// Scale to unit length in place; vectors shorter than `1e-5` become zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy, or [`Vector2::ZERO`] for near-zero input.
    #[must_use]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > NORMALIZE_EPSILON {
            self / magnitude
        } else {
            Self::ZERO
        }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Linear interpolation between two points (unclamped).
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    /// True when the squared distance between the two is below `1e-10`.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).sqr_magnitude() < APPROX_EQ_SQR_EPSILON
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude() {
        assert_relative_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
        assert_relative_eq!(Vector2::new(3.0, 4.0).sqr_magnitude(), 25.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector2::new(0.0, 10.0);
        v.normalize();
        assert_eq!(v, Vector2::UP);

        assert_eq!(Vector2::new(1e-6, 0.0).normalized(), Vector2::ZERO);
    }

    #[test]
    fn test_operators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vector2::new(1.5, -0.5));
    }

    #[test]
    fn test_lerp_and_distance() {
        let mid = Vector2::ZERO.lerp(Vector2::new(10.0, 10.0), 0.5);
        assert_eq!(mid, Vector2::new(5.0, 5.0));
        assert_relative_eq!(Vector2::ZERO.distance(Vector2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_approx_eq() {
        let a = Vector2::new(1.0, 1.0);
        assert!(a.approx_eq(Vector2::new(1.0 + 1e-6, 1.0)));
        assert!(!a.approx_eq(Vector2::new(1.001, 1.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.5, -3.04).to_string(), "(1.5, -3.0)");
    }
}
