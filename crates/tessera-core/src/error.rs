//! Error types shared by the Tessera crates

/// Errors raised by settings loading, query parsing and template rendering
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
	#[error("Template error: {0}")]
	Template(#[from] tera::Error),

	#[error("Template not found: {0}")]
	TemplateNotFound(String),

	#[error("Settings error: {0}")]
	Settings(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Query string error: {0}")]
	Query(#[from] serde_urlencoded::de::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result alias for [`CoreError`]
pub type Result<T> = std::result::Result<T, CoreError>;
