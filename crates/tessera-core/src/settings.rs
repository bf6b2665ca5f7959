//! Table and form defaults
//!
//! Settings are plain serde structs. Every struct is `#[serde(default)]`, so a
//! configuration file only needs the keys it wants to change and unknown keys
//! are ignored.
//!
//! ```toml
//! [table]
//! empty = "Nothing to show"
//! per_page = 25
//!
//! [table.attributes]
//! class = "table table-striped"
//!
//! [form]
//! submit_button = "Save"
//! ```

use crate::error::{CoreError, Result};
use crate::layout::builtin_view;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Defaults applied to every new table grid
	pub table: TableSettings,
	/// Defaults applied to every new form grid
	pub form: FormSettings,
}

impl Settings {
	/// Parses settings from a TOML document
	///
	/// ```rust
	/// use tessera_core::Settings;
	///
	/// let settings = Settings::from_toml_str("[table]\nper_page = 30\n").unwrap();
	/// assert_eq!(settings.table.per_page, Some(30));
	/// assert_eq!(settings.table.page_name, "page");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads settings from a TOML file
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!("loaded tessera settings from {}", path.display());
		Ok(settings)
	}

	/// Builds settings from an already parsed JSON value
	pub fn from_value(value: serde_json::Value) -> Result<Self> {
		if !value.is_object() {
			return Err(CoreError::Settings(
				"settings must be a JSON object".to_string(),
			));
		}
		Ok(serde_json::from_value(value)?)
	}
}

/// Defaults for table grids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Message (or translation key) displayed when there are no rows
	pub empty: String,
	/// Template identifier used to render the table
	pub view: String,
	/// Page size used when pagination is enabled without an explicit size
	pub per_page: Option<usize>,
	/// Query string key carrying the page number
	pub page_name: String,
	/// Attributes of the `<table>` element
	pub attributes: IndexMap<String, String>,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			empty: "No records".to_string(),
			view: builtin_view("table", "horizontal"),
			per_page: None,
			page_name: "page".to_string(),
			attributes: IndexMap::new(),
		}
	}
}

/// Defaults for form grids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Template identifier used to render the form
	pub view: String,
	/// Label of the submit button
	pub submit_button: String,
	/// Markup wrapping the first error of a control, `:message` is replaced
	pub error_message: String,
	/// Whether a CSRF token field is emitted
	pub token: bool,
	/// Attributes of the `<form>` element
	pub attributes: IndexMap<String, String>,
}

impl Default for FormSettings {
	fn default() -> Self {
		let mut attributes = IndexMap::new();
		attributes.insert("method".to_string(), "POST".to_string());
		Self {
			view: builtin_view("form", "horizontal"),
			submit_button: "Submit".to_string(),
			error_message: "<p class=\"help-block error\">:message</p>".to_string(),
			token: true,
			attributes,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.table.empty, "No records");
		assert_eq!(settings.table.view, "tessera/table/horizontal.html");
		assert_eq!(settings.table.per_page, None);
		assert_eq!(settings.form.submit_button, "Submit");
		assert_eq!(
			settings.form.attributes.get("method").map(String::as_str),
			Some("POST")
		);
		assert!(settings.form.token);
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = Settings::from_toml_str(
			r#"
			unknown_key = true

			[table]
			empty = "No data"
			view = "foo"

			[table.attributes]
			class = "table"
			"#,
		)
		.unwrap();

		assert_eq!(settings.table.empty, "No data");
		assert_eq!(settings.table.view, "foo");
		assert_eq!(settings.table.page_name, "page");
		assert_eq!(
			settings.table.attributes.get("class").map(String::as_str),
			Some("table")
		);
		assert_eq!(settings.form, FormSettings::default());
	}

	#[rstest]
	fn test_invalid_toml() {
		let result = Settings::from_toml_str("[table\nempty = 1");
		assert!(matches!(result, Err(CoreError::Toml(_))));
	}

	#[rstest]
	fn test_from_value() {
		let settings = Settings::from_value(json!({"form": {"token": false}})).unwrap();
		assert!(!settings.form.token);

		let result = Settings::from_value(json!(["not", "an", "object"]));
		assert!(matches!(result, Err(CoreError::Settings(_))));
	}

	#[rstest]
	fn test_from_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[form]\nsubmit_button = \"Save\"").unwrap();

		let settings = Settings::from_path(file.path()).unwrap();
		assert_eq!(settings.form.submit_button, "Save");
	}

	#[rstest]
	fn test_missing_file() {
		let result = Settings::from_path("/nonexistent/tessera.toml");
		assert!(matches!(result, Err(CoreError::Io(_))));
	}
}
