//! Fixed-capacity min-priority queue with O(1) membership tests.
//!
//! [`IndexedPriorityQueue`] is a binary min-heap over a dense array where
//! every live element knows its own slot. That back-reference is what lets
//! the queue answer [`contains`](IndexedPriorityQueue::contains) in O(1) and
//! [`remove`](IndexedPriorityQueue::remove) or
//! [`update_priority`](IndexedPriorityQueue::update_priority) any element in
//! O(log n) without searching for it.
//!
//! Elements are addressed through the [`Handle`] returned by
//! [`enqueue`](IndexedPriorityQueue::enqueue). The priority of a live element
//! is owned by the queue and can only be changed through
//! `update_priority`, so the heap can never be silently corrupted by an
//! out-of-band priority write.
//!
//! # Example
//!
//! ```
//! use fastheap::collections::IndexedPriorityQueue;
//!
//! let mut queue = IndexedPriorityQueue::new(5);
//! let _a = queue.enqueue("a", 5.0)?;
//! let _b = queue.enqueue("b", 1.0)?;
//! let c = queue.enqueue("c", 3.0)?;
//!
//! assert_eq!(queue.dequeue()?, "b");
//! queue.update_priority(c, 0.5)?;
//! assert_eq!(queue.dequeue()?, "c");
//! assert_eq!(queue.dequeue()?, "a");
//! # Ok::<(), fastheap::Error>(())
//! ```
//!
//! # Ordering
//!
//! Lower priority values are dequeued first. Elements with equal priority
//! come out in an unspecified order; insertion order is not preserved.

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use crate::error::{Error, Result};

/// Source of per-instance queue ids, so a handle is only ever accepted by
/// the queue that issued it.
static NEXT_QUEUE_ID: AtomicU32 = AtomicU32::new(1);

fn next_queue_id() -> u32 {
    NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Opaque reference to an element enqueued in an [`IndexedPriorityQueue`].
///
/// A handle stays valid until its element leaves the queue (dequeue,
/// remove, clear or reset). After that it is stale forever, even if the
/// storage it pointed at is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    queue: u32,
    index: usize,
    generation: u32,
}

/// Heap slot: the element's priority lives here, next to the ordering it drives.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    priority: f32,
    /// Index into `IndexedPriorityQueue::cells`.
    cell: usize,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    /// 1-based slot in `heap`.
    slot: usize,
}

#[derive(Debug)]
enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
struct Cell<T> {
    generation: u32,
    entry: Entry<T>,
}

/// A fixed-capacity, index-tracked binary min-heap.
///
/// Invariants between operations:
///
/// - **Heap property**: for every live slot `i` in `2..=len`,
///   `priority(i) >= priority(i / 2)`.
/// - **Bijection**: the element in slot `i` records slot `i`, and every live
///   handle's recorded slot holds that handle's element.
/// - `len <= capacity`.
///
/// The queue is not synchronized. Every mutation takes `&mut self`; share
/// it across threads only behind an external lock.
#[derive(Debug)]
pub struct IndexedPriorityQueue<T> {
    id: u32,
    /// `heap[0]` is an unused sentinel; `heap[1..=len]` are the live slots.
    heap: Vec<HeapEntry>,
    /// Element storage addressed by handles. Vacant cells form a free list.
    cells: Vec<Cell<T>>,
    free_head: Option<usize>,
    capacity: usize,
}

const SENTINEL: HeapEntry = HeapEntry { priority: f32::NEG_INFINITY, cell: usize::MAX };

impl<T> IndexedPriorityQueue<T> {
    /// Create an empty queue that can hold at most `capacity` elements.
    ///
    /// Heap and element storage are reserved here, so enqueues up to
    /// `capacity` never reallocate. If the allocator refuses the reservation
    /// the queue still works and grows on demand.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut heap = Vec::new();
        reserve_total(&mut heap, capacity.saturating_add(1));
        heap.push(SENTINEL);

        let mut cells = Vec::new();
        reserve_total(&mut cells, capacity);

        Self { id: next_queue_id(), heap, cells, free_head: None, capacity }
    }

    /// Reinitialize the queue in place with a new capacity.
    ///
    /// Held elements are dropped without being dequeued individually and
    /// every handle issued before the reset becomes stale.
    pub fn reset(&mut self, capacity: usize) {
        debug!(dropped = self.len(), capacity, "Resetting priority queue");
        *self = Self::new(capacity);
    }

    /// Remove every element, keeping the current capacity.
    ///
    /// O(n) for dropping the held values.
    pub fn clear(&mut self) {
        debug!(dropped = self.len(), "Clearing priority queue");
        self.heap.truncate(1);
        self.cells.clear();
        self.free_head = None;
        // Fresh id: handles issued so far must not match reused cells.
        self.id = next_queue_id();
    }

    /// Number of live elements. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    /// Maximum number of elements the queue can hold at once. O(1).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no element is enqueued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the next enqueue would exceed capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Returns true if `handle` names a live element of this queue. O(1).
    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.node(handle).is_some()
    }

    /// The minimum-priority element, without removing it.
    pub fn peek(&self) -> Result<&T> {
        let root = self.heap.get(1).ok_or(Error::EmptyQueue)?;
        self.value_at(root.cell).ok_or(Error::EmptyQueue)
    }

    /// Handle of the minimum-priority element.
    pub fn peek_handle(&self) -> Result<Handle> {
        let root = self.heap.get(1).ok_or(Error::EmptyQueue)?;
        Ok(self.handle_for(root.cell))
    }

    /// Priority of the minimum-priority element.
    pub fn peek_priority(&self) -> Result<f32> {
        self.heap.get(1).map(|root| root.priority).ok_or(Error::EmptyQueue)
    }

    /// Enqueue `value` with `priority` and return its handle. O(log n).
    ///
    /// Lower priorities are dequeued first.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] when the queue is full and
    /// [`Error::InvalidPriority`] when `priority` is NaN. The queue is left
    /// unchanged in both cases.
    pub fn enqueue(&mut self, value: T, priority: f32) -> Result<Handle> {
        check_priority(priority)?;
        if self.is_full() {
            return Err(Error::CapacityExceeded { capacity: self.capacity });
        }

        let slot = self.heap.len();
        let cell = self.allocate(Node { value, slot });
        self.heap.push(HeapEntry { priority, cell });
        self.sift_up(slot);

        Ok(self.handle_for(cell))
    }

    /// Remove and return the minimum-priority element. O(log n).
    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_with_priority().map(|(value, _)| value)
    }

    /// Remove and return the minimum-priority element with its priority.
    pub fn dequeue_with_priority(&mut self) -> Result<(T, f32)> {
        if self.is_empty() {
            return Err(Error::EmptyQueue);
        }

        // The last live slot moves into the root.
        let root = self.heap.swap_remove(1);
        if self.len() > 0 {
            self.set_slot(self.heap[1].cell, 1);
            self.sift_down(1);
        }

        let value = self.release(root.cell).ok_or(Error::EmptyQueue)?;
        Ok((value, root.priority))
    }

    /// Remove an arbitrary element and return its value. O(log n).
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] when `handle` is not contained in this queue.
    pub fn remove(&mut self, handle: Handle) -> Result<T> {
        let slot = self.node(handle).ok_or(Error::StaleHandle)?.slot;

        self.heap.swap_remove(slot);
        if slot <= self.len() {
            // The former last element now sits in `slot` and may violate the
            // heap property against either its parent or its children.
            self.set_slot(self.heap[slot].cell, slot);
            self.restore(slot);
        }

        self.release(handle.index).ok_or(Error::StaleHandle)
    }

    /// Change the priority of a live element. O(log n).
    ///
    /// This is the only way to change a priority once enqueued.
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] when `handle` is not contained in this queue,
    /// [`Error::InvalidPriority`] when `priority` is NaN.
    pub fn update_priority(&mut self, handle: Handle, priority: f32) -> Result<()> {
        check_priority(priority)?;
        let slot = self.node(handle).ok_or(Error::StaleHandle)?.slot;

        self.heap[slot].priority = priority;
        self.restore(slot);
        Ok(())
    }

    /// Current priority of a live element.
    pub fn priority(&self, handle: Handle) -> Result<f32> {
        let slot = self.node(handle).ok_or(Error::StaleHandle)?.slot;
        Ok(self.heap[slot].priority)
    }

    /// Borrow the value of a live element.
    pub fn get(&self, handle: Handle) -> Result<&T> {
        self.node(handle).map(|node| &node.value).ok_or(Error::StaleHandle)
    }

    /// Mutably borrow the value of a live element.
    ///
    /// The priority is not reachable through this borrow; use
    /// [`update_priority`](Self::update_priority) to reorder.
    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut T> {
        if !self.contains(handle) {
            return Err(Error::StaleHandle);
        }
        match self.cells.get_mut(handle.index).map(|c| &mut c.entry) {
            Some(Entry::Occupied(node)) => Ok(&mut node.value),
            _ => Err(Error::StaleHandle),
        }
    }

    /// Reallocate the backing array for `new_capacity` elements. O(new_capacity).
    ///
    /// Live elements and their handles are preserved. Shrinking is allowed
    /// down to the current length.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityBelowLen`] when `new_capacity < len()`.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let len = self.len();
        if new_capacity < len {
            return Err(Error::CapacityBelowLen { requested: new_capacity, len });
        }

        debug!(from = self.capacity, to = new_capacity, len, "Resizing priority queue");

        let slots = new_capacity.saturating_add(1);
        reserve_total(&mut self.heap, slots);
        self.heap.shrink_to(slots);
        reserve_total(&mut self.cells, new_capacity);
        self.cells.shrink_to(new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Iterate live elements in slot order (not priority order).
    ///
    /// The iterator is `Clone`, so a copy taken before advancing restarts
    /// the walk.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { queue: self, slots: self.heap[1..].iter() }
    }

    /// **Diagnostic only.** Checks the heap property and the slot bijection.
    ///
    /// O(n). Intended for tests and debugging, not for production call sites.
    #[must_use]
    pub fn validate(&self) -> bool {
        let len = self.len();

        let heap_ordered = (2..=len).all(|i| self.heap[i].priority >= self.heap[i / 2].priority);

        let slots_consistent = (1..=len).all(|i| {
            matches!(
                self.cells.get(self.heap[i].cell).map(|c| &c.entry),
                Some(Entry::Occupied(node)) if node.slot == i
            )
        });

        let occupied = self.cells.iter().filter(|c| matches!(c.entry, Entry::Occupied(_))).count();

        heap_ordered && slots_consistent && occupied == len
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn node(&self, handle: Handle) -> Option<&Node<T>> {
        if handle.queue != self.id {
            return None;
        }
        let cell = self.cells.get(handle.index)?;
        if cell.generation != handle.generation {
            return None;
        }
        match &cell.entry {
            Entry::Occupied(node)
                if self.heap.get(node.slot).is_some_and(|e| e.cell == handle.index) =>
            {
                Some(node)
            }
            _ => None,
        }
    }

    fn value_at(&self, cell: usize) -> Option<&T> {
        match self.cells.get(cell).map(|c| &c.entry) {
            Some(Entry::Occupied(node)) => Some(&node.value),
            _ => None,
        }
    }

    fn handle_for(&self, cell: usize) -> Handle {
        let generation = self.cells.get(cell).map_or(0, |c| c.generation);
        Handle { queue: self.id, index: cell, generation }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.free_head {
            if let Some(cell) = self.cells.get_mut(index) {
                if let Entry::Vacant { next_free } = cell.entry {
                    self.free_head = next_free;
                    cell.entry = Entry::Occupied(node);
                    return index;
                }
            }
        }
        self.cells.push(Cell { generation: 0, entry: Entry::Occupied(node) });
        self.cells.len() - 1
    }

    /// Vacate a cell, bumping its generation so outstanding handles go stale.
    ///
    /// A cell whose generation is exhausted is retired instead of reused, so
    /// a handle can never come back to life through wraparound.
    fn release(&mut self, index: usize) -> Option<T> {
        let cell = self.cells.get_mut(index)?;
        if !matches!(cell.entry, Entry::Occupied(_)) {
            return None;
        }
        let retire = cell.generation == u32::MAX;
        let next_free = if retire { None } else { self.free_head };
        let entry = std::mem::replace(&mut cell.entry, Entry::Vacant { next_free });
        if retire {
            debug!(cell = index, "Retiring queue cell with exhausted generation");
        } else {
            cell.generation += 1;
            self.free_head = Some(index);
        }
        match entry {
            Entry::Occupied(node) => Some(node.value),
            Entry::Vacant { .. } => None,
        }
    }

    fn set_slot(&mut self, cell: usize, slot: usize) {
        if let Some(Entry::Occupied(node)) = self.cells.get_mut(cell).map(|c| &mut c.entry) {
            node.slot = slot;
        }
    }

    /// Sift up if smaller than the parent, otherwise sift down.
    fn restore(&mut self, slot: usize) {
        if slot > 1 && self.heap[slot].priority < self.heap[slot / 2].priority {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        let moving = self.heap[slot];
        while slot > 1 {
            let parent = slot / 2;
            let above = self.heap[parent];
            if above.priority <= moving.priority {
                break;
            }
            self.heap[slot] = above;
            self.set_slot(above.cell, slot);
            slot = parent;
        }
        self.heap[slot] = moving;
        self.set_slot(moving.cell, slot);
    }

    fn sift_down(&mut self, mut slot: usize) {
        let moving = self.heap[slot];
        let len = self.len();
        loop {
            let left = slot * 2;
            if left > len {
                break;
            }
            // Ties between siblings go to the left child.
            let right = left + 1;
            let child =
                if right <= len && self.heap[right].priority < self.heap[left].priority {
                    right
                } else {
                    left
                };
            let below = self.heap[child];
            if below.priority >= moving.priority {
                break;
            }
            self.heap[slot] = below;
            self.set_slot(below.cell, slot);
            slot = child;
        }
        self.heap[slot] = moving;
        self.set_slot(moving.cell, slot);
    }
}

/// Grow `vec`'s allocation to hold `total` elements, if the allocator allows.
fn reserve_total<E>(vec: &mut Vec<E>, total: usize) {
    let additional = total.saturating_sub(vec.len());
    if let Err(err) = vec.try_reserve_exact(additional) {
        debug!(total, %err, "Queue storage not reserved up front");
    }
}

fn check_priority(priority: f32) -> Result<()> {
    if priority.is_nan() {
        Err(Error::InvalidPriority(priority))
    } else {
        Ok(())
    }
}

/// Iterator over the live elements of an [`IndexedPriorityQueue`] in slot order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a IndexedPriorityQueue<T>,
    slots: std::slice::Iter<'a, HeapEntry>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { queue: self.queue, slots: self.slots.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.next()?;
        let value = self.queue.value_at(entry.cell)?;
        Some((self.queue.handle_for(entry.cell), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a IndexedPriorityQueue<T> {
    type Item = (Handle, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
