//! Integer rasterization.
//!
//! Lines and filled triangles are first *staged* into a set of pixels,
//! then painted onto a [`Canvas`](crate::canvas::Canvas). Staging is pure,
//! so the same set can be tested, clipped or reused.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer numerator form, every pixel from start
//!   to end inclusive
//! - **Scanline Fill**: per-row spans between the outermost edge pixels
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod bresenham;
mod brush;
mod primitives;
mod stage;

pub use bresenham::{Bresenham, Pixel};
pub use brush::{Brush, BrushShape};
pub use primitives::{Drawable, Line, Triangle};
pub use stage::{stage_line, stage_line_horizontal, stage_triangle};
