//! View selection for grids and forms

use std::fmt;

/// Layout of a rendered grid
///
/// The two built-in layouts map onto templates shipped with the table and
/// form crates; any other name is treated as the identifier of a template the
/// application registered itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
	/// Built-in horizontal layout
	Horizontal,
	/// Built-in vertical layout
	Vertical,
	/// Application provided template identifier
	Custom(String),
}

impl Layout {
	/// Resolves a layout name
	///
	/// ```rust
	/// use tessera_core::Layout;
	///
	/// assert_eq!(Layout::parse("vertical"), Layout::Vertical);
	/// assert_eq!(Layout::parse("admin/users.html"), Layout::Custom("admin/users.html".into()));
	/// ```
	pub fn parse(name: &str) -> Self {
		match name {
			"horizontal" => Self::Horizontal,
			"vertical" => Self::Vertical,
			other => Self::Custom(other.to_string()),
		}
	}

	/// Returns the template identifier within `namespace` (`"table"`, `"form"`)
	///
	/// ```rust
	/// use tessera_core::Layout;
	///
	/// assert_eq!(Layout::Horizontal.view("table"), "tessera/table/horizontal.html");
	/// assert_eq!(Layout::Custom("foo".into()).view("table"), "foo");
	/// ```
	pub fn view(&self, namespace: &str) -> String {
		match self {
			Self::Horizontal | Self::Vertical => builtin_view(namespace, self.name()),
			Self::Custom(view) => view.clone(),
		}
	}

	/// Returns the layout name (the custom identifier for custom layouts)
	pub fn name(&self) -> &str {
		match self {
			Self::Horizontal => "horizontal",
			Self::Vertical => "vertical",
			Self::Custom(view) => view,
		}
	}
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Template identifier of a built-in layout
pub fn builtin_view(namespace: &str, layout: &str) -> String {
	format!("tessera/{namespace}/{layout}.html")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("horizontal", "tessera/form/horizontal.html")]
	#[case("vertical", "tessera/form/vertical.html")]
	#[case("custom.path", "custom.path")]
	#[case("Horizontal", "Horizontal")]
	fn test_form_views(#[case] name: &str, #[case] view: &str) {
		assert_eq!(Layout::parse(name).view("form"), view);
	}

	#[rstest]
	fn test_display() {
		assert_eq!(Layout::Vertical.to_string(), "vertical");
	}
}
