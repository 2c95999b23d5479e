//! # fastheap
//!
//! Fixed-capacity indexed priority queue, with the small geometry and
//! rasterization toolkit that path-finding and mesh code tends to need
//! around it.
//!
//! ## Features
//!
//! - **Indexed Min-Heap**: `O(log n)` enqueue, dequeue, removal and
//!   priority update of any element through an opaque [`Handle`]
//! - **No Allocation After Construction**: heap and element storage are
//!   reserved up front; capacity only changes through an explicit `resize`
//! - **Safe Misuse**: stale or foreign handles are reported as
//!   [`Error::StaleHandle`], never undefined behavior
//! - **Raster Toolkit**: Bresenham lines, filled triangles, brushes and an
//!   RGBA canvas
//!
//! ## Quick Start
//!
//! ```rust
//! use fastheap::prelude::*;
//!
//! let mut queue = IndexedPriorityQueue::new(8);
//! let a = queue.enqueue("A", 5.0)?;
//! let _b = queue.enqueue("B", 1.0)?;
//! let c = queue.enqueue("C", 3.0)?;
//!
//! assert_eq!(queue.dequeue()?, "B");
//! queue.update_priority(c, 0.5)?;
//! assert_eq!(queue.dequeue()?, "C");
//! assert!(queue.contains(a));
//! # Ok::<(), fastheap::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for value types and configs
//!
//! ## References
//!
//! - Williams, J. W. J. (1964). "Algorithm 232: Heapsort." CACM 7(6).
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!
//! [`Handle`]: collections::Handle

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Indexed priority queue.
pub mod collections;

/// Color types.
pub mod color;

/// Geometric primitives (vectors, rectangles, meshes).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Integer rasterization: lines, triangles and brushes.
pub mod raster;

/// RGBA pixel canvas.
pub mod canvas;

// ============================================================================
// Utility Modules
// ============================================================================

/// Rate-limited progress reporting.
pub mod progress;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for fastheap operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use fastheap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::collections::{Handle, IndexedPriorityQueue};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Mesh, Rect, Vector2, Vector3};
    pub use crate::progress::{Progress, ProgressConfig};
    pub use crate::raster::{Bresenham, Brush, BrushShape, Drawable, Line, Pixel, Triangle};
}
