//! Renderable cell and control content

use crate::escape::escape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup that must be emitted without escaping
///
/// # Example
///
/// ```rust
/// use tessera_html::{Content, Expression};
///
/// let bold = Expression::new("<b>Bold</b>");
/// assert_eq!(Content::from(bold).to_html(), "<b>Bold</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Expression(String);

impl Expression {
	/// Wraps already safe markup
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Returns the markup
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Unwraps the markup
	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Expression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Expression {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Value displayed in a table cell or produced by a form control
///
/// Text is escaped when converted to HTML, expressions are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	/// Plain text, escaped on output
	Text(String),
	/// Raw markup, emitted verbatim
	Html(Expression),
}

impl Content {
	/// Empty text content
	pub fn empty() -> Self {
		Self::Text(String::new())
	}

	/// Returns the HTML representation
	///
	/// ```rust
	/// use tessera_html::Content;
	///
	/// assert_eq!(Content::from("a < b").to_html(), "a &lt; b");
	/// ```
	pub fn to_html(&self) -> String {
		match self {
			Self::Text(text) => escape(text),
			Self::Html(expression) => expression.as_str().to_string(),
		}
	}

	/// Returns the unescaped underlying string
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(text) => text,
			Self::Html(expression) => expression.as_str(),
		}
	}

	/// Returns `true` for empty text or markup
	pub fn is_empty(&self) -> bool {
		self.as_str().is_empty()
	}
}

impl Default for Content {
	fn default() -> Self {
		Self::empty()
	}
}

impl From<&str> for Content {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for Content {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for Content {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<Expression> for Content {
	fn from(value: Expression) -> Self {
		Self::Html(value)
	}
}

impl From<serde_json::Value> for Content {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::empty(),
			serde_json::Value::String(s) => Self::Text(s),
			other => Self::Text(other.to_string()),
		}
	}
}

impl From<Option<serde_json::Value>> for Content {
	fn from(value: Option<serde_json::Value>) -> Self {
		value.map(Self::from).unwrap_or_default()
	}
}

impl fmt::Display for Content {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}
