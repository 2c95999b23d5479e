//! Pixel canvas for painting staged rasters.
//!
//! A [`Canvas`] is a row-major grid of [`Rgba`] values. Painting is
//! bounds-checked: coordinates outside the canvas are skipped, never
//! wrapped or clamped.

use tracing::trace;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::raster::{stage_line, stage_triangle, Bresenham, Brush, Pixel};

/// Row-major RGBA pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels in row-major order.
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a transparent canvas with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fastheap::canvas::Canvas;
    ///
    /// let canvas = Canvas::new(800, 600).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let pixels = vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)];
        Ok(Self { width, height, pixels })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the pixel data in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Tightly packed RGBA bytes, for handing to an image encoder.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Clear the canvas to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to canvas bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        for row_y in y1..y2 {
            let start = self.index(x1, row_y);
            self.pixels[start..start + (x2 - x1) as usize].fill(color);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set one pixel. Out-of-range coordinates are skipped and traced.
    pub fn paint(&mut self, x: i32, y: i32, color: Rgba) {
        match self.checked_index(x, y) {
            Some(idx) => self.pixels[idx] = color,
            None => {
                trace!(x, y, width = self.width, height = self.height, "Paint out of range");
            }
        }
    }

    /// Set one pixel by coordinate.
    pub fn paint_pixel(&mut self, pixel: Pixel, color: Rgba) {
        self.paint(pixel.x, pixel.y, color);
    }

    /// Set every pixel in `pixels`.
    pub fn paint_pixels<I>(&mut self, pixels: I, color: Rgba)
    where
        I: IntoIterator<Item = Pixel>,
    {
        for pixel in pixels {
            self.paint_pixel(pixel, color);
        }
    }

    /// Paint the Bresenham line from `p1` to `p2`.
    pub fn paint_line(&mut self, p1: Pixel, p2: Pixel, color: Rgba) {
        self.paint_pixels(stage_line(p1, p2), color);
    }

    /// Paint the filled triangle `p1`, `p2`, `p3`.
    pub fn paint_triangle(&mut self, p1: Pixel, p2: Pixel, p3: Pixel, color: Rgba) {
        self.paint_pixels(stage_triangle(p1, p2, p3), color);
    }

    /// Stamp `brush` centered on `center`, silently clipping to the canvas.
    ///
    /// Footprint offsets that would leave the `i32` range are clipped too.
    pub fn paint_with_brush(&mut self, center: Pixel, brush: &Brush) {
        let color = brush.color();
        for offset in brush.footprint() {
            let Some(pixel) = center.checked_offset(offset.x, offset.y) else {
                continue;
            };
            if let Some(idx) = self.checked_index(pixel.x, pixel.y) {
                self.pixels[idx] = color;
            }
        }
    }

    /// Stamp `brush` at every pixel of the line from `p1` to `p2`.
    pub fn brush_line(&mut self, p1: Pixel, p2: Pixel, brush: &Brush) {
        for pixel in Bresenham::new(p1, p2) {
            self.paint_with_brush(pixel, brush);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(self.index(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BrushShape;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 50).unwrap();
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 50);
        assert_eq!(canvas.pixel_count(), 5000);
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Canvas::new(0, 100).is_err());
        assert!(Canvas::new(100, 0).is_err());
        assert!(Canvas::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(Rgba::RED);
        assert!(canvas.pixels().iter().all(|&p| p == Rgba::RED));
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.fill_rect(10, 10, 20, 20, Rgba::RED);

        assert_eq!(canvas.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(30, 30), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.fill_rect(8, 8, u32::MAX, u32::MAX, Rgba::BLUE);
        assert_eq!(canvas.get_pixel(9, 9), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(7, 7), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_paint_out_of_range_is_ignored() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.paint(-1, 0, Rgba::RED);
        canvas.paint(0, 4, Rgba::RED);
        canvas.paint(4, 0, Rgba::RED);
        assert!(canvas.pixels().iter().all(|&p| p == Rgba::TRANSPARENT));

        canvas.paint(3, 3, Rgba::RED);
        assert_eq!(canvas.get_pixel(3, 3), Some(Rgba::RED));
    }

    #[test]
    fn test_paint_line() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.paint_line(Pixel::new(10, 10), Pixel::new(90, 90), Rgba::BLACK);

        assert_eq!(canvas.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(90, 90), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(50, 51), Some(Rgba::WHITE));
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.clear(Rgba::WHITE);

        // Line that goes out of bounds should not panic
        canvas.paint_line(Pixel::new(-10, -10), Pixel::new(110, 110), Rgba::BLACK);

        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(99, 99), Some(Rgba::BLACK));
    }

    #[test]
    fn test_paint_triangle() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.paint_triangle(Pixel::new(0, 0), Pixel::new(10, 0), Pixel::new(0, 10), Rgba::GREEN);

        assert_eq!(canvas.get_pixel(2, 2), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(9, 9), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_brush_clips_at_edges() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        let brush = Brush::new(BrushShape::Square, 3, Rgba::RED);
        canvas.paint_with_brush(Pixel::new(0, 0), &brush);

        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(1, 1), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(2, 2), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_brush_at_coordinate_limits() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let brush = Brush::new(BrushShape::Square, 3, Rgba::RED);

        canvas.paint_with_brush(Pixel::new(i32::MAX, 0), &brush);
        canvas.paint_with_brush(Pixel::new(0, i32::MIN), &brush);
        canvas.paint_with_brush(Pixel::new(i32::MIN, i32::MAX), &brush);
        assert!(canvas.pixels().iter().all(|&p| p == Rgba::TRANSPARENT));

        canvas.brush_line(Pixel::new(i32::MAX - 1, 0), Pixel::new(i32::MAX, 0), &brush);
        assert!(canvas.pixels().iter().all(|&p| p == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_brush_line_is_thick() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let brush = Brush::new(BrushShape::Circle, 3, Rgba::BLUE);
        canvas.brush_line(Pixel::new(2, 10), Pixel::new(17, 10), &brush);

        for x in 2..=17 {
            assert_eq!(canvas.get_pixel(x, 9), Some(Rgba::BLUE));
            assert_eq!(canvas.get_pixel(x, 10), Some(Rgba::BLUE));
            assert_eq!(canvas.get_pixel(x, 11), Some(Rgba::BLUE));
        }
        assert_eq!(canvas.get_pixel(10, 12), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_row_and_bytes() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.paint(1, 1, Rgba::new(1, 2, 3, 4));

        assert_eq!(canvas.row(1).map(|r| r[1]), Some(Rgba::new(1, 2, 3, 4)));
        assert!(canvas.row(2).is_none());

        let bytes = canvas.to_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[16..20], &[1, 2, 3, 4]);
    }
}
