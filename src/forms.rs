//! Form grids

pub use tessera_forms::*;
