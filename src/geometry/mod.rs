//! Geometric primitives.
//!
//! Vector math, rectangles and a small triangle mesh container, plus free
//! helpers for centroids, circumcircles and collinearity tests.

mod rect;
mod vector2;
mod vector3;

pub use rect::Rect;
pub use vector2::Vector2;
pub use vector3::Vector3;

/// An indexed 2D triangle mesh.
///
/// `triangles` holds vertex indices, three per triangle.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Vector2>,
    /// Vertex indices, three per triangle.
    pub triangles: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from vertices and triangle indices.
    #[must_use]
    pub fn new(vertices: Vec<Vector2>, triangles: Vec<u32>) -> Self {
        Self { vertices, triangles }
    }

    /// Number of complete triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Corner positions of triangle `index`, or `None` if the triangle or
    /// any of its vertex indices is out of range.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<[Vector2; 3]> {
        let corners = self.triangles.get(index * 3..index * 3 + 3)?;
        Some([
            *self.vertices.get(corners[0] as usize)?,
            *self.vertices.get(corners[1] as usize)?,
            *self.vertices.get(corners[2] as usize)?,
        ])
    }
}

/// Center and squared radius of a triangle's circumscribed circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    /// Circle center.
    pub center: Vector2,
    /// Squared radius.
    pub radius_sqr: f32,
}

/// Mean of a set of points, or `None` for an empty set.
#[must_use]
pub fn centroid<I>(points: I) -> Option<Vector2>
where
    I: IntoIterator<Item = Vector2>,
{
    let (count, sum) = points
        .into_iter()
        .fold((0usize, Vector2::ZERO), |(n, acc), p| (n + 1, acc + p));
    (count > 0).then(|| sum / count as f32)
}

/// Circle through `a`, `b` and `c`, or `None` when the points are collinear.
#[must_use]
pub fn circumcircle(a: Vector2, b: Vector2, c: Vector2) -> Option<Circumcircle> {
    let ab = b - a;
    let ac = c - a;
    let e = ab.x * (a.x + b.x) + ab.y * (a.y + b.y);
    let f = ac.x * (a.x + c.x) + ac.y * (a.y + c.y);
    let g = 2.0 * (ab.x * (c.y - b.y) - ab.y * (c.x - b.x));

    if g == 0.0 {
        return None;
    }

    let center = Vector2::new((ac.y * e - ab.y * f) / g, (ab.x * f - ac.x * e) / g);
    Some(Circumcircle { center, radius_sqr: (center - a).sqr_magnitude() })
}

/// True when the three points lie on one line, within `epsilon`.
#[must_use]
pub fn are_collinear(v0: Vector2, v1: Vector2, v2: Vector2, epsilon: f32) -> bool {
    approx_eq((v0.y - v1.y) * (v0.x - v2.x), (v0.y - v2.y) * (v0.x - v1.x), epsilon)
}

/// Absolute-difference float comparison.
///
/// Not suitable near infinities or for relative tolerances.
#[must_use]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
