//! Pixel staging: compute the pixel set of a shape without painting it.

use std::collections::HashSet;

use tracing::trace;

use super::bresenham::{Bresenham, Pixel};

/// All pixels on the line from `p1` to `p2`, endpoints included.
#[must_use]
pub fn stage_line(p1: Pixel, p2: Pixel) -> HashSet<Pixel> {
    Bresenham::new(p1, p2).collect()
}

/// All pixels on row `y` between `x0` and `x1` inclusive, in either order.
#[must_use]
pub fn stage_line_horizontal(y: i32, x0: i32, x1: i32) -> HashSet<Pixel> {
    let (start, end) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    (start..=end).map(|x| Pixel::new(x, y)).collect()
}

/// All pixels of the filled triangle `p1`, `p2`, `p3`.
///
/// The three edges are walked with [`Bresenham`]; each covered row is then
/// filled between its leftmost and rightmost edge pixel. Degenerate
/// triangles (coincident or collinear corners) stage their edge pixels.
#[must_use]
pub fn stage_triangle(p1: Pixel, p2: Pixel, p3: Pixel) -> HashSet<Pixel> {
    let mut corners = [p1, p2, p3];
    // Full (y, x) order so ties on y still walk edges in one direction.
    corners.sort_by_key(|p| (p.y, p.x));
    let [top, middle, bottom] = corners;

    let row_count = (i64::from(bottom.y) - i64::from(top.y) + 1) as usize;
    let mut spans: Vec<Option<(i32, i32)>> = vec![None; row_count];

    let edges = [(top, bottom), (top, middle), (middle, bottom)];
    for pixel in edges.into_iter().flat_map(|(a, b)| Bresenham::new(a, b)) {
        let row = (i64::from(pixel.y) - i64::from(top.y)) as usize;
        if let Some(span) = spans.get_mut(row) {
            *span = Some(match *span {
                Some((lo, hi)) => (lo.min(pixel.x), hi.max(pixel.x)),
                None => (pixel.x, pixel.x),
            });
        }
    }

    trace!(rows = row_count, top = ?top, bottom = ?bottom, "Staging triangle");

    spans
        .iter()
        .zip(top.y..)
        .filter_map(|(span, y)| span.map(|(lo, hi)| (y, lo, hi)))
        .flat_map(|(y, lo, hi)| (lo..=hi).map(move |x| Pixel::new(x, y)))
        .collect()
}
