use std::cmp::Ordering;

use thiserror::Error;

use crate::order::Compare;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full")]
    Full,
    #[error("heap is empty")]
    Empty,
}

/// Array-backed binary heap with a capacity fixed at construction and an
/// injected ordering. Slots at indices `len()..capacity()` are padding and
/// are never read; after an extract the vacated slot keeps the stale value.
pub struct BinaryHeap<T, C> {
    elements: Vec<T>,
    size: usize,
    compare: C,
}

impl<T: Clone + Default, C: Compare<T>> BinaryHeap<T, C> {
    /// Builds a heap from `initial`, padding the backing store out to
    /// `capacity` with `T::default()`. Heapifies bottom-up, sifting down
    /// each parent from the last one to the root.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than `initial.len()`.
    pub fn new(initial: Vec<T>, capacity: usize, compare: C) -> Self {
        assert!(
            capacity >= initial.len(),
            "capacity {} cannot hold {} initial elements",
            capacity,
            initial.len()
        );

        let size = initial.len();
        let mut elements = initial;
        elements.resize(capacity, T::default());

        let mut heap = BinaryHeap {
            elements,
            size,
            compare,
        };
        for index in (0..size / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    pub fn insert(&mut self, element: T) -> Result<(), HeapError> {
        if self.size == self.capacity() {
            return Err(HeapError::Full);
        }

        self.elements[self.size] = element;
        self.size += 1;
        self.sift_up(self.size - 1);
        Ok(())
    }

    pub fn extract(&mut self) -> Result<T, HeapError> {
        if self.size == 0 {
            return Err(HeapError::Empty);
        }

        self.elements.swap(0, self.size - 1);
        self.size -= 1;
        self.sift_down(0);
        Ok(self.elements[self.size].clone())
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements[..self.size].first()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    fn ranks_above(&self, a: usize, b: usize) -> bool {
        self.compare.compare(&self.elements[a], &self.elements[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.ranks_above(index, parent) {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= self.size {
                break;
            }

            // ties between children go to the left child
            let mut best = left;
            if right < self.size && self.ranks_above(right, left) {
                best = right;
            }

            if self.ranks_above(best, index) {
                self.elements.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}
