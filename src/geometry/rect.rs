//! Axis-aligned rectangle.

use std::fmt;

use super::Vector2;

/// A rectangle defined by its minimum corner and size.
///
/// Edge setters (`set_x_min`, `set_y_max`, ...) move one edge and keep the
/// opposite edge where it was.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the minimum corner.
    pub x: f32,
    /// Y coordinate of the minimum corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from its minimum corner and size.
    #[must_use]
    pub const fn from_min_size(min: Vector2, size: Vector2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Smallest x.
    #[must_use]
    pub fn x_min(&self) -> f32 {
        self.x
    }

    /// Largest x.
    #[must_use]
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    /// Smallest y.
    #[must_use]
    pub fn y_min(&self) -> f32 {
        self.y
    }

    /// Largest y.
    #[must_use]
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Move the left edge, keeping the right edge fixed.
    pub fn set_x_min(&mut self, value: f32) {
        let x_max = self.x_max();
        self.x = value;
        self.width = x_max - value;
    }

    /// Move the right edge, keeping the left edge fixed.
    pub fn set_x_max(&mut self, value: f32) {
        self.width = value - self.x;
    }

    /// Move the bottom edge, keeping the top edge fixed.
    pub fn set_y_min(&mut self, value: f32) {
        let y_max = self.y_max();
        self.y = value;
        self.height = y_max - value;
    }

    /// Move the top edge, keeping the bottom edge fixed.
    pub fn set_y_max(&mut self, value: f32) {
        self.height = value - self.y;
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Vector2 {
        Vector2::new(self.x_min(), self.y_min())
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vector2 {
        Vector2::new(self.x_max(), self.y_max())
    }

    /// Position of the minimum corner.
    #[must_use]
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle so its center lands on `center`, keeping its size.
    pub fn set_center(&mut self, center: Vector2) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    /// Check if a point is inside the rectangle.
    ///
    /// The minimum edges are inclusive and the maximum edges exclusive, so
    /// tiled rectangles never both contain a shared edge.
    #[must_use]
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x_min()
            && point.x < self.x_max()
            && point.y >= self.y_min()
            && point.y < self.y_max()
    }

    /// Grow the rectangle just enough to include `point`.
    pub fn encapsulate(&mut self, point: Vector2) {
        if point.x > self.x_max() {
            self.set_x_max(point.x);
        }
        if point.x < self.x_min() {
            self.set_x_min(point.x);
        }
        if point.y > self.y_max() {
            self.set_y_max(point.y);
        }
        if point.y < self.y_min() {
            self.set_y_min(point.y);
        }
    }

    /// Get the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x:{:.2}, y:{:.2}, width:{:.2}, height:{:.2})",
            self.x, self.y, self.width, self.height
        )
    }
}
