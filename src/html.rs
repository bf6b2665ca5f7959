//! Escaping, attribute maps and element helpers

pub use tessera_html::*;
