/// How [`SortedList::add`](crate::sorted_list::SortedList::add) treats a value
/// that compares equal to one already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// The value is dropped and the list is left untouched.
    #[default]
    Reject,
    /// The value is inserted after every element equal to it.
    Allow,
}
