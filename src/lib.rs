//! Disjoint-set forests, with the naive model and the random inputs they
//! are tested against.

#[doc(inline)]
pub use union_find::{self, *};

pub mod naive {
    #[doc(inline)]
    pub use disjoint_set::*;
}

#[doc(inline)]
pub use randgen;
