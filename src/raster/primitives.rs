//! Pixel-space shapes that can be staged and painted.

use std::collections::HashSet;

use crate::canvas::Canvas;
use crate::color::Rgba;

use super::{stage_line, stage_triangle, Pixel};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Every pixel this shape covers.
    fn pixels(&self) -> HashSet<Pixel>;

    /// Draw this primitive to a canvas.
    fn draw(&self, canvas: &mut Canvas, color: Rgba) {
        canvas.paint_pixels(self.pixels(), color);
    }
}

impl Drawable for Pixel {
    fn pixels(&self) -> HashSet<Pixel> {
        HashSet::from([*self])
    }

    fn draw(&self, canvas: &mut Canvas, color: Rgba) {
        canvas.paint_pixel(*self, color);
    }
}

/// A line segment between two pixels, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// First endpoint.
    pub start: Pixel,
    /// Second endpoint.
    pub end: Pixel,
}

impl Line {
    /// Create a new line.
    #[must_use]
    pub const fn new(start: Pixel, end: Pixel) -> Self {
        Self { start, end }
    }
}

impl Drawable for Line {
    fn pixels(&self) -> HashSet<Pixel> {
        stage_line(self.start, self.end)
    }
}

/// A filled triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First corner.
    pub a: Pixel,
    /// Second corner.
    pub b: Pixel,
    /// Third corner.
    pub c: Pixel,
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: Pixel, b: Pixel, c: Pixel) -> Self {
        Self { a, b, c }
    }

    /// The three edges, in corner order.
    #[must_use]
    pub const fn edges(&self) -> [Line; 3] {
        [Line::new(self.a, self.b), Line::new(self.b, self.c), Line::new(self.a, self.c)]
    }
}

impl Drawable for Triangle {
    fn pixels(&self) -> HashSet<Pixel> {
        stage_triangle(self.a, self.b, self.c)
    }
}
