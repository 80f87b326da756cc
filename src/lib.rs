pub use strata_collections as collections;
pub use strata_util as util;

pub mod prelude {
    pub use strata_collections::prelude::*;
    pub use strata_util::prelude::*;
}
