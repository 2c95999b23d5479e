//! Three-dimensional `f32` vector.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::vector2::{APPROX_EQ_SQR_EPSILON, NORMALIZE_EPSILON};
use super::Vector2;

/// A 3D vector with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// All components `+inf`.
    pub const POSITIVE_INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    /// All components `-inf`.
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Overwrite all components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Component by index (`0 => x`, `1 => y`, `2 => z`).
    #[must_use]
    pub fn get(self, index: usize) -> Option<f32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length, accumulated in `f64`.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        f64::from(self.sqr_magnitude()).sqrt() as f32
    }

    /// Squared length, accumulated in `f64`.
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        let (x, y, z) = (f64::from(self.x), f64::from(self.y), f64::from(self.z));
        (x * x + y * y + z * z) as f32
    }

    /// Scale to unit length in place; vectors shorter than `1e-5` become zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy, or [`Vector3::ZERO`] for near-zero input.
    #[must_use]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > NORMALIZE_EPSILON {
            self / magnitude
        } else {
            Self::ZERO
        }
    }

    /// Dot product, accumulated in `f64`.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        (f64::from(self.x) * f64::from(other.x)
            + f64::from(self.y) * f64::from(other.y)
            + f64::from(self.z) * f64::from(other.z)) as f32
    }

    /// Cross product, accumulated in `f64`.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        let (ax, ay, az) = (f64::from(self.x), f64::from(self.y), f64::from(self.z));
        let (bx, by, bz) = (f64::from(other.x), f64::from(other.y), f64::from(other.z));
        Self::new(
            (ay * bz - az * by) as f32,
            (az * bx - ax * bz) as f32,
            (ax * by - ay * bx) as f32,
        )
    }

    /// Reflect `self` off the plane defined by `normal` (expected unit length).
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        -2.0 * normal.dot(self) * normal + self
    }

    /// Component-wise product.
    #[must_use]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Linear interpolation; `t` is not clamped.
    #[must_use]
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Step from `self` toward `target` by at most `max_distance`.
    ///
    /// Returns `target` once it is within reach.
    #[must_use]
    pub fn move_towards(self, target: Self, max_distance: f32) -> Self {
        let delta = target - self;
        let magnitude = delta.magnitude();
        if magnitude <= max_distance || magnitude < f32::MIN_POSITIVE {
            return target;
        }
        self + delta / magnitude * max_distance
    }

    /// True when the squared distance between the two is below `1e-10`.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).sqr_magnitude() < APPROX_EQ_SQR_EPSILON
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
