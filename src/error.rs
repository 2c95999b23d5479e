//! Error types for fastheap operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fastheap operations.
///
/// Every fallible operation is atomic: when an `Err` is returned the
/// structure it was called on is left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Enqueue on a queue that already holds `capacity` elements.
    #[error("Queue capacity exceeded: already holding {capacity} elements")]
    CapacityExceeded {
        /// Fixed capacity of the queue.
        capacity: usize,
    },

    /// Resize to a capacity smaller than the number of live elements.
    #[error("Cannot resize queue to {requested}: {len} elements are live")]
    CapacityBelowLen {
        /// Requested capacity.
        requested: usize,
        /// Live element count at the time of the request.
        len: usize,
    },

    /// Peek or dequeue on an empty queue.
    #[error("Queue is empty")]
    EmptyQueue,

    /// Handle does not name a live element of this queue.
    #[error("Handle does not refer to an element in this queue")]
    StaleHandle,

    /// Priority is NaN and cannot be ordered.
    #[error("Invalid priority: {0}")]
    InvalidPriority(f32),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
