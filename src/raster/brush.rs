//! Brush footprints for stroked painting.

use crate::color::Rgba;

use super::bresenham::Pixel;

/// Outline of a brush footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrushShape {
    /// Every offset within the square of half-width `size / 2`.
    Square,
    /// Offsets within distance `size / 2` of the center.
    Circle,
}

impl BrushShape {
    /// Whether offset `(x, y)` lies inside a footprint of the given radius.
    ///
    /// Squares are computed in `i64` so large radii cannot overflow.
    #[must_use]
    pub fn covers(self, x: i32, y: i32, radius: i32) -> bool {
        let (x, y, r) = (i64::from(x), i64::from(y), i64::from(radius));
        match self {
            Self::Square => x.abs() <= r && y.abs() <= r,
            Self::Circle => x * x + y * y <= r * r,
        }
    }
}

/// A colored stamp applied around each pixel of a stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    shape: BrushShape,
    size: u32,
    color: Rgba,
    footprint: Vec<Pixel>,
}

impl Brush {
    /// Build a brush and precompute its footprint.
    ///
    /// The radius is `size / 2` with integer division, so sizes 4 and 5
    /// produce the same footprint.
    #[must_use]
    pub fn new(shape: BrushShape, size: u32, color: Rgba) -> Self {
        // `size / 2` always fits in an i32.
        let radius = i32::try_from(size / 2).unwrap_or(i32::MAX);

        let footprint = (-radius..=radius)
            .flat_map(|x| (-radius..=radius).map(move |y| Pixel::new(x, y)))
            .filter(|p| shape.covers(p.x, p.y, radius))
            .collect();

        Self { shape, size, color, footprint }
    }

    /// Footprint outline.
    #[must_use]
    pub const fn shape(&self) -> BrushShape {
        self.shape
    }

    /// Nominal size in pixels.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Paint color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Pixel offsets relative to the stamp center.
    #[must_use]
    pub fn footprint(&self) -> &[Pixel] {
        &self.footprint
    }
}
