use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::Index,
};

use strata_util::debug_once;

use crate::{
    cursor::Cursor,
    error::{CollectionError, Result},
    policy::DuplicatePolicy,
};

/// Decodes a negative [`SortedList::index_of`] result into the insertion point it encodes.
///
/// Returns `None` for non-negative results, which are indices of existing elements.
pub fn decode_insertion_point(encoded: isize) -> Option<usize> {
    if encoded < 0 {
        Some((-1 - encoded) as usize)
    } else {
        None
    }
}

/// A contiguous list kept in ascending order.
///
/// Duplicates are rejected by [`add`](Self::add) unless the list was built with
/// [`DuplicatePolicy::Allow`].
#[derive(Debug, Clone)]
pub struct SortedList<E: Ord> {
    data: Vec<E>,
    policy: DuplicatePolicy,
}

impl<E: Ord> SortedList<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::with_capacity_and_policy(0, policy)
    }

    pub fn with_capacity_and_policy(capacity: usize, policy: DuplicatePolicy) -> Self {
        if policy == DuplicatePolicy::Allow {
            debug_once!("SortedList using DuplicatePolicy::Allow, duplicates are kept");
        }
        Self {
            data: Vec::with_capacity(capacity),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            log::debug!("Clearing {} elements", self.data.len());
        }
        self.data.clear();
    }

    pub fn contains(&self, value: &E) -> bool {
        self.index_of(value) >= 0
    }

    /// Binary search for `value`.
    ///
    /// Returns `Ok` with the lowest index of an element equal to `value`, or `Err` with the
    /// index at which `value` would have to be inserted to keep the list sorted.
    ///
    /// Finding the lowest index walks back over equal predecessors, so a list made up of
    /// `k` copies of `value` costs `O(log n + k)`.
    pub fn search(&self, value: &E) -> std::result::Result<usize, usize> {
        let mut min = 0;
        let mut max = self.data.len();

        // `max` is exclusive
        while min < max {
            let mut mid = min + (max - min) / 2;
            match self.data[mid].cmp(value) {
                Ordering::Greater => max = mid,
                Ordering::Less => min = mid + 1,
                Ordering::Equal => {
                    while mid > 0 && self.data[mid - 1].cmp(value).is_eq() {
                        mid -= 1;
                    }
                    return Ok(mid);
                }
            }
        }

        Err(min)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// If there is none, returns `-(insertion_point + 1)`: `-1` means `value` belongs at
    /// index 0, `-5` means it belongs at index 4. See [`decode_insertion_point`].
    pub fn index_of(&self, value: &E) -> isize {
        match self.search(value) {
            Ok(index) => index as isize,
            Err(insertion_point) => -(insertion_point as isize) - 1,
        }
    }

    pub fn get(&self, index: usize) -> Result<&E> {
        self.data.get(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.data.len(),
        })
    }

    pub fn first(&self) -> Option<&E> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&E> {
        self.data.last()
    }

    /// Copies of every stored element equal to `value`, in list order.
    pub fn get_matching(&self, value: &E) -> Vec<E>
    where
        E: Clone,
    {
        self.equal_run(value).to_vec()
    }

    pub fn count(&self, value: &E) -> usize {
        self.equal_run(value).len()
    }

    /// Inserts `value` at its sorted position.
    ///
    /// Under [`DuplicatePolicy::Reject`] a value equal to an existing element is dropped and
    /// `false` is returned. Under [`DuplicatePolicy::Allow`] it goes after the existing equal
    /// elements, so equal elements stay in insertion order.
    pub fn add(&mut self, value: E) -> bool {
        match self.search(&value) {
            Err(insertion_point) => {
                self.data.insert(insertion_point, value);
                true
            }
            Ok(first) => match self.policy {
                DuplicatePolicy::Reject => {
                    log::trace!("Equal element already at index {first}, not inserting");
                    false
                }
                DuplicatePolicy::Allow => {
                    let run = self.data[first..].partition_point(|e| e.cmp(&value).is_eq());
                    self.data.insert(first + run, value);
                    true
                }
            },
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<E> {
        if index >= self.data.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Removes the first element equal to `value`.
    pub fn remove_value(&mut self, value: &E) -> Option<E> {
        let index = self.search(value).ok()?;
        Some(self.data.remove(index))
    }

    pub fn cursor(&self) -> Cursor<'_, E> {
        Cursor::new(self)
    }

    pub fn iter(&self) -> Cursor<'_, E> {
        self.cursor()
    }

    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    fn equal_run(&self, value: &E) -> &[E] {
        match self.search(value) {
            Ok(first) => {
                let rest = &self.data[first..];
                let len = rest.partition_point(|e| e.cmp(value).is_eq());
                &rest[..len]
            }
            Err(_) => &[],
        }
    }
}

impl<E: Ord> Default for SortedList<E> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            policy: DuplicatePolicy::default(),
        }
    }
}

impl<E: Ord> PartialEq for SortedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<E: Ord> Eq for SortedList<E> {}

impl<E: Ord + Hash> Hash for SortedList<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<E: Ord> Index<usize> for SortedList<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<E: Ord> FromIterator<E> for SortedList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<E: Ord> Extend<E> for SortedList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, E: Ord> IntoIterator for &'a SortedList<E> {
    type Item = &'a E;
    type IntoIter = Cursor<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<E: Ord> IntoIterator for SortedList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::SortedList;
    use crate::policy::DuplicatePolicy;

    #[derive(Serialize)]
    struct SerializeList<'a, E> {
        policy: DuplicatePolicy,
        data: &'a [E],
    }

    #[derive(Deserialize)]
    struct DeserializeList<E> {
        #[serde(default)]
        policy: DuplicatePolicy,
        data: Vec<E>,
    }

    impl<E: Ord + Serialize> Serialize for SortedList<E> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SerializeList {
                policy: self.policy,
                data: &self.data,
            }
            .serialize(serializer)
        }
    }

    // input order is not trusted, every element goes back through `add` under the stored policy
    impl<'de, E: Ord + Deserialize<'de>> Deserialize<'de> for SortedList<E> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = DeserializeList::<E>::deserialize(deserializer)?;
            let mut list = SortedList::with_capacity_and_policy(raw.data.len(), raw.policy);
            list.extend(raw.data);
            Ok(list)
        }
    }
}
