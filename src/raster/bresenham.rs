//! Integer line enumeration.

use std::iter::FusedIterator;

use crate::geometry::Vector2;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset, saturating at the `i32` bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Component-wise offset, or `None` if either coordinate overflows.
    #[must_use]
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

/// Truncates toward zero, matching an `as i32` cast of each component.
impl From<Vector2> for Pixel {
    fn from(v: Vector2) -> Self {
        Self::new(v.x as i32, v.y as i32)
    }
}

impl From<Pixel> for Vector2 {
    fn from(p: Pixel) -> Self {
        Vector2::new(p.x as f32, p.y as f32)
    }
}

/// Iterator over every pixel on the line from `start` to `end`, inclusive.
///
/// Uses the integer numerator form of Bresenham's algorithm: each step
/// advances one pixel along the major axis, and additionally along the
/// minor axis whenever the accumulated numerator reaches the major length.
/// The numerator starts at half the major length, which centers the minor
/// steps along the run.
///
/// The iterator is `Clone`; [`reset`](Self::reset) rewinds it in place.
///
/// # References
///
/// - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
#[derive(Debug, Clone)]
pub struct Bresenham {
    start: Pixel,
    end: Pixel,
    current: Pixel,
    /// Pixels not yet yielded, including `current`.
    remaining: usize,
    numerator: i64,
    longest: i64,
    shortest: i64,
    /// Step taken when the numerator overflows (both axes).
    diagonal: (i32, i32),
    /// Step taken otherwise (major axis only).
    straight: (i32, i32),
}

impl Bresenham {
    /// Create an iterator over the line from `start` to `end`.
    #[must_use]
    pub fn new(start: Pixel, end: Pixel) -> Self {
        let w = i64::from(end.x) - i64::from(start.x);
        let h = i64::from(end.y) - i64::from(start.y);
        let sx = w.signum() as i32;
        let sy = h.signum() as i32;

        let (longest, shortest, straight) = if w.abs() > h.abs() {
            (w.abs(), h.abs(), (sx, 0))
        } else {
            (h.abs(), w.abs(), (0, sy))
        };

        let mut line = Self {
            start,
            end,
            current: start,
            remaining: 0,
            numerator: 0,
            longest,
            shortest,
            diagonal: (sx, sy),
            straight,
        };
        line.reset();
        line
    }

    /// First pixel of the line.
    #[must_use]
    pub const fn start(&self) -> Pixel {
        self.start
    }

    /// Last pixel of the line.
    #[must_use]
    pub const fn end(&self) -> Pixel {
        self.end
    }

    /// Rewind to the first pixel.
    pub fn reset(&mut self) {
        self.current = self.start;
        self.numerator = self.longest >> 1;
        self.remaining = usize::try_from(self.longest).map_or(usize::MAX, |n| n.saturating_add(1));
    }

    fn advance(&mut self) {
        self.numerator += self.shortest;
        let (dx, dy) = if self.numerator >= self.longest {
            self.numerator -= self.longest;
            self.diagonal
        } else {
            self.straight
        };
        self.current = self.current.offset(dx, dy);
    }
}

impl Iterator for Bresenham {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.remaining == 0 {
            return None;
        }
        let pixel = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bresenham {}

impl FusedIterator for Bresenham {}
