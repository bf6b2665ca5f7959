//! Tera template registry
//!
//! The renderers never talk to Tera directly; they look views up by
//! identifier in [`Templates`]. Built-in layouts are registered by the table
//! and form crates, applications add their own templates on top.
//!
//! Identifiers ending in `.html`, `.htm` or `.xml` are auto-escaped by Tera.

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

/// Registry of named templates
#[derive(Debug, Default)]
pub struct Templates {
	tera: Tera,
}

impl Templates {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self {
			tera: Tera::default(),
		}
	}

	/// Registers a template from source
	///
	/// ```rust
	/// use tessera_core::Templates;
	///
	/// let mut templates = Templates::new();
	/// templates.register("hello.html", "Hello {{ name }}!").unwrap();
	///
	/// let html = templates
	///     .render_serialize("hello.html", &serde_json::json!({"name": "<World>"}))
	///     .unwrap();
	/// assert_eq!(html, "Hello &lt;World&gt;!");
	/// ```
	pub fn register(&mut self, name: &str, source: &str) -> Result<()> {
		self.tera.add_raw_template(name, source)?;
		Ok(())
	}

	/// Registers a template stored on disk under `name`
	pub fn register_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
		self.tera.add_template_file(path.as_ref(), Some(name))?;
		Ok(())
	}

	/// Returns `true` if a template with this identifier is registered
	pub fn has(&self, name: &str) -> bool {
		self.tera.get_template_names().any(|n| n == name)
	}

	/// Renders `name` with an explicit Tera context
	pub fn render(&self, name: &str, context: &Context) -> Result<String> {
		if !self.has(name) {
			return Err(CoreError::TemplateNotFound(name.to_string()));
		}
		tracing::debug!(view = name, "rendering template");
		Ok(self.tera.render(name, context)?)
	}

	/// Renders `name` with any serializable data as context
	///
	/// The data must serialize to a map; its keys become template variables.
	pub fn render_serialize<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
		let context = Context::from_serialize(data)?;
		self.render(name, &context)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::io::Write;

	#[rstest]
	fn test_missing_template() {
		let templates = Templates::new();
		let result = templates.render("missing.html", &Context::new());
		assert!(matches!(result, Err(CoreError::TemplateNotFound(name)) if name == "missing.html"));
	}

	#[rstest]
	fn test_syntax_error_is_reported() {
		let mut templates = Templates::new();
		let result = templates.register("broken.html", "{% for %}");
		assert!(matches!(result, Err(CoreError::Template(_))));
	}

	#[rstest]
	fn test_safe_filter_skips_escaping() {
		let mut templates = Templates::new();
		templates
			.register("cell.html", "{{ text }}|{{ html | safe }}")
			.unwrap();

		let output = templates
			.render_serialize("cell.html", &json!({"text": "<b>", "html": "<b>"}))
			.unwrap();
		assert_eq!(output, "&lt;b&gt;|<b>");
	}

	#[rstest]
	fn test_register_file() {
		let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
		write!(file, "<p>{{{{ message }}}}</p>").unwrap();

		let mut templates = Templates::new();
		templates.register_file("custom/page.html", file.path()).unwrap();

		assert!(templates.has("custom/page.html"));
		let output = templates
			.render_serialize("custom/page.html", &json!({"message": "hi"}))
			.unwrap();
		assert_eq!(output, "<p>hi</p>");
	}
}
