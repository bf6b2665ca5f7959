//! Error types for table grids

use tessera_core::CoreError;

/// Errors raised while configuring or rendering a grid
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TableError {
	/// `of` was called with an id that was never registered
	#[error("Column name [{0}] is not available")]
	ColumnNotFound(String),

	/// The row source could not be turned into rows
	#[error("Unable to convert model to rows: {0}")]
	RowConversion(String),

	/// Search/sort needs a query builder, the grid holds something else
	#[error("Unable to load query builder from model: {0}")]
	QueryBuilderRequired(String),

	/// The query backend failed to produce rows
	#[error("Query failed: {0}")]
	Query(#[source] Box<dyn std::error::Error + Send + Sync>),

	/// Template or settings failure
	#[error(transparent)]
	Core(#[from] CoreError),
}

/// Result alias for [`TableError`]
pub type Result<T> = std::result::Result<T, TableError>;
