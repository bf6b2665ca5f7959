//! # Tessera
//!
//! Declarative HTML table grids and form layouts for server-rendered admin
//! screens.
//!
//! A grid is configured in code (columns or controls, where the rows come
//! from, search, sort and pagination) and rendered through Tera templates.
//! Built-in `horizontal` and `vertical` layouts are provided for both tables
//! and forms, and any view registered in the [`Environment`] can replace them.
//!
//! ## Feature Flags
//!
//! - `tables` - [`Grid`](tables::Grid) and [`TableBuilder`](tables::TableBuilder)
//! - `forms` - [`FormGrid`](forms::FormGrid) and [`FormBuilder`](forms::FormBuilder)
//! - `full` (default) - both of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use tessera::prelude::*;
//!
//! let env = tessera::environment(Settings::default()).unwrap();
//! let query = QueryParams::parse("page=1").unwrap();
//!
//! let mut table = TableBuilder::make(&env, query, |grid| {
//!     grid.with(MemoryQuery::new(vec![json!({"id": 1, "name": "Ann"})]), true);
//!     grid.column("id");
//!     grid.column("name");
//!     grid.search(&["name"])?.sort()?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert!(table.render().unwrap().contains("<td>Ann</td>"));
//! ```

#![warn(missing_docs)]

pub mod core;
#[cfg(feature = "forms")]
pub mod forms;
pub mod html;
#[cfg(feature = "tables")]
pub mod tables;

pub use tessera_core::{CoreError, Environment, Settings};

/// Builds an [`Environment`] with every enabled built-in template registered
///
/// ```rust
/// let env = tessera::environment(tessera::Settings::default()).unwrap();
/// assert!(env.templates().has("tessera/table/horizontal.html"));
/// assert!(env.templates().has("tessera/form/vertical.html"));
/// ```
pub fn environment(settings: Settings) -> Result<Environment, CoreError> {
	#[allow(unused_mut)]
	let mut env = Environment::new(settings);
	#[cfg(feature = "tables")]
	tessera_tables::register_templates(env.templates_mut())?;
	#[cfg(feature = "forms")]
	tessera_forms::register_templates(env.templates_mut())?;
	tracing::debug!("tessera environment ready");
	Ok(env)
}

/// Commonly used types
pub mod prelude {
	pub use tessera_core::{
		Environment, Layout, QueryParams, RowAccessor, Serialized, Settings, Translator,
	};
	pub use tessera_html::{Attributes, Content, Expression, HtmlBuilder, attributes};

	#[cfg(feature = "forms")]
	pub use tessera_forms::{FieldType, FormBuilder, FormGrid, MessageBag};
	#[cfg(feature = "tables")]
	pub use tessera_tables::{
		Grid, MemoryQuery, Model, Paginator, QueryBuilder, SortDirection, TableBuilder,
	};
}
