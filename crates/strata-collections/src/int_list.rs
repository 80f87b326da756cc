use crate::error::{CollectionError, Result};

pub const DEFAULT_CAPACITY: usize = 100;

/// An unsorted, growable list of `i32`.
///
/// Capacity is tracked here rather than read from the backing `Vec`, so growth always
/// follows the doubling rule in [`IntList::ensure_capacity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntList {
    data: Vec<i32>,
    capacity: usize,
}

impl IntList {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, value: i32) {
        self.ensure_capacity(self.data.len() + 1);
        self.data.push(value);
    }

    /// Inserts `value` at `index`, shifting later elements right. `index` may equal `len()`.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<()> {
        if index > self.data.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        self.ensure_capacity(self.data.len() + 1);
        self.data.insert(index, value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<i32> {
        self.data
            .get(index)
            .copied()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Grows the list so it can hold at least `required` elements.
    ///
    /// The new capacity is double the old one, or exactly `required` if doubling falls short.
    pub fn ensure_capacity(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }

        let new_capacity = self.capacity.saturating_mul(2).max(required);
        log::trace!("Growing IntList from {} to {}", self.capacity, new_capacity);
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

impl Default for IntList {
    fn default() -> Self {
        Self::new()
    }
}
