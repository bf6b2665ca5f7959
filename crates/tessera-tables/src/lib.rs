//! Declarative HTML table grids
//!
//! A [`Grid`] describes a listing screen: which columns to show, where the
//! rows come from (literal rows, a collection, a page of results or a lazy
//! [`QueryBuilder`]), whether to paginate, and which template to render with.
//! [`TableBuilder`] resolves the rows and renders the grid through the Tera
//! templates registered in the [`Environment`](tessera_core::Environment).
//!
//! # Features
//!
//! - **Columns**: register by name, by label and field, or with a callback;
//!   overwrite later with [`Grid::of`]
//! - **Row sources**: literal rows or a [`Model`], resolved lazily on first read
//! - **Searching**: `?q=` keyword matched across several fields
//! - **Sorting**: `?order_by=field&direction=desc`
//! - **Pagination**: `?page=N` with Bootstrap style links
//! - **Layouts**: built-in `horizontal`/`vertical` templates or custom views
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableBuilder] --> B[Grid]
//!     B --> C[Columns]
//!     B --> D[Model]
//!     D --> E[QueryBuilder]
//!     D --> F[Paginator]
//!     D --> G[Rows]
//!     A --> H[Templates]
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tessera_core::{Environment, QueryParams};
//! use tessera_tables::{Model, TableBuilder, register_templates};
//!
//! let mut env = Environment::default();
//! register_templates(env.templates_mut()).unwrap();
//!
//! let users = vec![json!({"id": 1, "name": "Alice"}), json!({"id": 2, "name": "Bob"})];
//!
//! let mut table = TableBuilder::make(&env, QueryParams::new(), |grid| {
//!     grid.with(Model::Rows(users), false);
//!     grid.column("id");
//!     grid.labeled_column("Full Name", "name");
//!     Ok(())
//! })
//! .unwrap();
//!
//! let html = table.render().unwrap();
//! assert!(html.contains("<th>Full Name</th>"));
//! assert!(html.contains("<td>Alice</td>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod column;
pub mod error;
pub mod grid;
pub mod memory;
pub mod model;
pub mod pagination;
pub mod templates;

// Re-exports for convenience
pub use builder::{
	CellContext, ColumnContext, GridContext, RowContext, TableAttributes, TableBuilder, TableContext,
};
pub use column::{Column, ColumnDefinition, ColumnValue, field_value, no_attributes};
pub use error::{Result, TableError};
pub use grid::{FilterParam, Grid, SearchState, SortState};
pub use memory::MemoryQuery;
pub use model::{Arrayable, Model, QueryBuilder, SearchFilter, SortDirection};
pub use pagination::{DEFAULT_PER_PAGE, Paginator, PerPage};
pub use templates::{HORIZONTAL, VERTICAL, register_templates};
