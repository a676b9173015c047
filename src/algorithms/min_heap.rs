use crate::errors::BoundsViolation;
use std::iter::FromIterator;

/**
 * A binary min-heap stored as an implicit complete tree.
 *
 * Node `i` has parent `(i - 1) / 2` and children `2i + 1`, `2i + 2`.  Unlike
 * `std::collections::BinaryHeap`, elements can be read and overwritten by raw
 * position.  Positions are not stable: any mutation may move elements, so
 * callers must re-read a position before updating it.
 */
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord + Clone> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<T: Ord + Clone> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element at `index`, without removing it.
    pub fn at(&self, index: usize) -> Result<T, BoundsViolation> {
        self.data
            .get(index)
            .cloned()
            .ok_or_else(|| BoundsViolation::past_end("at", index, self.len()))
    }

    pub fn peek(&self) -> Option<T> {
        self.data.first().cloned()
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Result<T, BoundsViolation> {
        if self.data.is_empty() {
            return Err(BoundsViolation::empty("extract_min"));
        }
        let min_value = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(min_value)
    }

    /**
     * Overwrite the element at `index` and restore the heap property.
     *
     * A smaller value can only violate the order with its ancestors, and a
     * larger one only with its descendants, so a single sift suffices.
     */
    pub fn update_value(&mut self, index: usize, new_value: T) -> Result<(), BoundsViolation> {
        if index >= self.len() {
            return Err(BoundsViolation::past_end("update_value", index, self.len()));
        }
        let decreased = new_value < self.data[index];
        self.data[index] = new_value;
        if decreased {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    fn parent(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.len() {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    fn left_child(&self, index: usize) -> Option<usize> {
        let child = 2 * index + 1;
        if child < self.len() {
            Some(child)
        } else {
            None
        }
    }

    fn right_child(&self, index: usize) -> Option<usize> {
        let child = 2 * index + 2;
        if child < self.len() {
            Some(child)
        } else {
            None
        }
    }

    // Ties go to the left child.
    fn smaller_child(&self, index: usize) -> Option<usize> {
        match (self.left_child(index), self.right_child(index)) {
            (Some(left), Some(right)) => {
                if self.data[right] < self.data[left] {
                    Some(right)
                } else {
                    Some(left)
                }
            }
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (None, None) => None,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = self.parent(index) {
            if self.data[index] >= self.data[parent] {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.smaller_child(index) {
            if self.data[index] <= self.data[child] {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T: Ord + Clone> From<Vec<T>> for MinHeap<T> {
    fn from(unordered: Vec<T>) -> Self {
        let mut heap = MinHeap::with_capacity(unordered.len());
        heap.extend(unordered);
        heap
    }
}

impl<T: Ord + Clone> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Clone> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
