pub mod cursor;
pub mod error;
pub mod int_list;
pub mod policy;
pub mod sorted_list;

pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::error::{CollectionError, Result};
    pub use crate::int_list::IntList;
    pub use crate::policy::DuplicatePolicy;
    pub use crate::sorted_list::{decode_insertion_point, SortedList};
}
