//! Collection types.
//!
//! - [`IndexedPriorityQueue`]: fixed-capacity min-heap with O(1) membership
//!   and O(log n) removal or reprioritization through [`Handle`]s.

mod priority_queue;

pub use priority_queue::{Handle, IndexedPriorityQueue, Iter};
