//! Fixed-capacity binary max-heap.

use crate::error::{PartitionError, Result};

/// Array-backed max-heap over non-negative integers.
///
/// Every parent is at least as large as its children. The capacity is
/// fixed at construction; the backing storage never reallocates.
#[derive(Debug, Clone)]
pub struct MaxHeap {
    items: Vec<u64>,
    capacity: usize,
}

impl MaxHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest element, if any.
    pub fn peek(&self) -> Option<u64> {
        self.items.first().copied()
    }

    /// Inserts `value` and sifts it up. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::HeapFull`] if the heap is at capacity;
    /// the heap is left unchanged.
    pub fn insert(&mut self, value: u64) -> Result<()> {
        if self.items.len() == self.capacity {
            return Err(PartitionError::HeapFull {
                capacity: self.capacity,
            });
        }

        self.items.push(value);
        let mut current = self.items.len() - 1;
        while current > 0 {
            let parent = parent(current);
            if self.items[parent] >= self.items[current] {
                break;
            }
            self.items.swap(parent, current);
            current = parent;
        }
        Ok(())
    }

    /// Removes and returns the largest element. O(log n).
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn delete_max(&mut self) -> u64 {
        assert!(!self.items.is_empty(), "delete_max on empty heap");
        let max = self.items.swap_remove(0);
        self.sift_down(0);
        max
    }

    fn sift_down(&mut self, mut start: usize) {
        let size = self.items.len();
        loop {
            let (l, r) = (left(start), right(start));
            let mut max = start;
            if l < size && self.items[l] > self.items[max] {
                max = l;
            }
            if r < size && self.items[r] > self.items[max] {
                max = r;
            }
            if max == start {
                return;
            }
            self.items.swap(start, max);
            start = max;
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}
