//! Table grids
//!
//! ```rust
//! use serde_json::json;
//! use tessera::core::QueryParams;
//! use tessera::tables::{Model, TableBuilder};
//!
//! let env = tessera::environment(Default::default()).unwrap();
//! let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
//!     grid.with(Model::Rows(vec![json!({"name": "Ann"})]), false);
//!     grid.column("name");
//!     Ok(())
//! })
//! .unwrap();
//! assert!(table.render().unwrap().contains("<td>Ann</td>"));
//! ```

pub use tessera_tables::*;
