//! Element builder

use crate::attributes::{Attributes, decorate, render_attributes};
use crate::content::{Content, Expression};
use crate::escape::escape;

/// Stateless helper producing HTML fragments
///
/// # Example
///
/// ```rust
/// use tessera_html::{HtmlBuilder, attributes};
///
/// let html = HtmlBuilder::new();
/// let link = html.create("a", Some("Home & away".into()), &attributes([("href", "/")]));
/// assert_eq!(link, r#"<a href="/">Home &amp; away</a>"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBuilder;

impl HtmlBuilder {
	/// Creates a builder
	pub fn new() -> Self {
		Self
	}

	/// Generates an element
	///
	/// With `value` the element is closed after its (escaped) content; without
	/// it only the opening tag is produced.
	///
	/// ```rust
	/// use tessera_html::{Attributes, HtmlBuilder};
	///
	/// let html = HtmlBuilder::new();
	/// assert_eq!(html.create("div", None, &Attributes::new()), "<div>");
	/// assert_eq!(html.create("p", Some("".into()), &Attributes::new()), "<p></p>");
	/// ```
	pub fn create(&self, tag: &str, value: Option<Content>, attributes: &Attributes) -> String {
		let mut content = format!("<{}{}>", tag, self.attributes(attributes));
		if let Some(value) = value {
			content.push_str(&self.entities(&value));
			content.push_str(&format!("</{}>", tag));
		}
		content
	}

	/// Converts content to HTML, escaping text and passing expressions through
	pub fn entities(&self, value: &Content) -> String {
		match value {
			Content::Text(text) => escape(text),
			Content::Html(expression) => expression.as_str().to_string(),
		}
	}

	/// Marks markup as safe to inject
	pub fn raw(&self, value: impl Into<String>) -> Expression {
		Expression::new(value)
	}

	/// Renders an attribute map (with a leading space per attribute)
	pub fn attributes(&self, attributes: &Attributes) -> String {
		render_attributes(attributes)
	}

	/// Merges attributes into defaults, see [`decorate`]
	pub fn decorate(&self, attributes: &Attributes, defaults: &Attributes) -> Attributes {
		decorate(attributes, defaults)
	}
}
