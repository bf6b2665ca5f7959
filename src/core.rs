//! Shared plumbing: settings, query parameters, row access and templates
//!
//! # Examples
//!
//! ```rust
//! use tessera::core::{QueryParams, Settings};
//!
//! let settings = Settings::default();
//! let query = QueryParams::parse("q=ann&page=2").unwrap();
//! assert_eq!(settings.table.page_name, "page");
//! assert_eq!(query.input("q"), Some("ann"));
//! ```

pub use tessera_core::*;
