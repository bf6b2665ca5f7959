//! Error types for form grids

use tessera_core::CoreError;

/// Errors raised while configuring or rendering a form
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// `of` was called on a fieldset with an unknown control name
	#[error("Control name [{0}] is not available")]
	ControlNotFound(String),

	/// `of` was called on a form with an unknown fieldset name
	#[error("Fieldset name [{0}] is not available")]
	FieldsetNotFound(String),

	/// Template or settings failure
	#[error(transparent)]
	Core(#[from] CoreError),
}

/// Result alias for [`FormError`]
pub type Result<T> = std::result::Result<T, FormError>;
