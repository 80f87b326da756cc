pub mod logging;

#[doc(hidden)]
pub mod re_exports {
    pub use lazy_static::lazy_static;
    pub use log;
    pub use parking_lot;
}

pub mod prelude {
    pub use crate::{debug_once, log_once};
}
