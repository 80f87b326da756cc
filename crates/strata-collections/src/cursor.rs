use std::iter::FusedIterator;

use crate::{
    error::{CollectionError, Result},
    sorted_list::SortedList,
};

/// Forward-only cursor over a [`SortedList`], starting at index 0.
///
/// The cursor keeps a position, not a snapshot: the end is checked against the list's
/// length on every step.
#[derive(Debug)]
pub struct Cursor<'a, E: Ord> {
    list: &'a SortedList<E>,
    position: usize,
}

impl<'a, E: Ord> Cursor<'a, E> {
    pub(crate) fn new(list: &'a SortedList<E>) -> Self {
        Self { list, position: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Like [`Iterator::next`], but reports exhaustion as [`CollectionError::EndOfSequence`].
    pub fn try_next(&mut self) -> Result<&'a E> {
        if !self.has_next() {
            return Err(CollectionError::EndOfSequence);
        }
        let item = &self.list[self.position];
        self.position += 1;
        Ok(item)
    }
}

impl<'a, E: Ord> Clone for Cursor<'a, E> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            position: self.position,
        }
    }
}

impl<'a, E: Ord> Iterator for Cursor<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a, E: Ord> ExactSizeIterator for Cursor<'a, E> {}

impl<'a, E: Ord> FusedIterator for Cursor<'a, E> {}
