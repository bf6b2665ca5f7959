//! HTML attribute maps

use crate::escape::escape_attr;
use indexmap::IndexMap;

/// Ordered map of HTML attributes
pub type Attributes = IndexMap<String, String>;

/// Builds an [`Attributes`] map from key/value pairs
///
/// ```rust
/// use tessera_html::attributes;
///
/// let attrs = attributes([("id", "users"), ("class", "table")]);
/// assert_eq!(attrs.get("id").map(String::as_str), Some("users"));
/// ```
pub fn attributes<K, V, I>(pairs: I) -> Attributes
where
	K: Into<String>,
	V: Into<String>,
	I: IntoIterator<Item = (K, V)>,
{
	pairs
		.into_iter()
		.map(|(k, v)| (k.into(), v.into()))
		.collect()
}

/// Renders attributes as they appear inside an opening tag
///
/// Each attribute is emitted as ` key="value"` with the value escaped. An
/// empty map renders as an empty string.
///
/// ```rust
/// use tessera_html::{attributes, render_attributes};
///
/// let attrs = attributes([("class", "table"), ("data-title", "Tom & \"Jerry\"")]);
/// assert_eq!(
///     render_attributes(&attrs),
///     r#" class="table" data-title="Tom &amp; &quot;Jerry&quot;""#
/// );
/// ```
pub fn render_attributes(attributes: &Attributes) -> String {
	attributes
		.iter()
		.map(|(key, value)| format!(" {}=\"{}\"", key, escape_attr(value)))
		.collect()
}

/// Merges `attributes` into `defaults`
///
/// The `class` values of both maps are combined (defaults first), split on
/// whitespace and de-duplicated in first-seen order. A token written as
/// `!name` removes `name` from the result, even when it only appears in the
/// defaults. Every other key is merged with `attributes` taking precedence.
/// The merged map only carries a `class` key when at least one class
/// survives.
///
/// ```rust
/// use tessera_html::{attributes, decorate};
///
/// let merged = decorate(
///     &attributes([("class", "a !b"), ("id", "x")]),
///     &attributes([("class", "b c"), ("id", "y")]),
/// );
/// assert_eq!(merged.get("class").map(String::as_str), Some("c a"));
/// assert_eq!(merged.get("id").map(String::as_str), Some("x"));
/// ```
pub fn decorate(attributes: &Attributes, defaults: &Attributes) -> Attributes {
	let default_class = defaults.get("class").map(String::as_str).unwrap_or("");
	let class = attributes.get("class").map(String::as_str).unwrap_or("");

	let mut current: Vec<&str> = Vec::new();
	for token in default_class.split_whitespace().chain(class.split_whitespace()) {
		if !current.contains(&token) {
			current.push(token);
		}
	}

	let excludes: Vec<&str> = current
		.iter()
		.copied()
		.filter_map(|token| token.strip_prefix('!'))
		.collect();

	let merged_class = current
		.into_iter()
		.filter(|token| !token.starts_with('!') && !excludes.contains(token))
		.collect::<Vec<_>>()
		.join(" ");

	let mut merged = defaults.clone();
	for (key, value) in attributes {
		merged.insert(key.clone(), value.clone());
	}

	if merged_class.is_empty() {
		merged.shift_remove("class");
	} else {
		merged.insert("class".to_string(), merged_class);
	}

	merged
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn class_of(attrs: &Attributes) -> Option<&str> {
		attrs.get("class").map(String::as_str)
	}

	#[rstest]
	fn test_class_union_is_deduplicated() {
		let merged = decorate(
			&attributes([("class", "a b")]),
			&attributes([("class", "b c")]),
		);
		assert_eq!(class_of(&merged), Some("b c a"));
	}

	#[rstest]
	fn test_exclusion_marker_removes_default_class() {
		let merged = decorate(
			&attributes([("class", "a !b")]),
			&attributes([("class", "b c")]),
		);
		let class = class_of(&merged).unwrap();
		assert!(!class.split(' ').any(|c| c == "b" || c == "!b"));
		assert_eq!(class, "c a");
	}

	#[rstest]
	fn test_empty_class_is_omitted() {
		let merged = decorate(
			&attributes([("class", "!btn"), ("id", "save")]),
			&attributes([("class", "btn")]),
		);
		assert_eq!(class_of(&merged), None);
		assert_eq!(merged.get("id").map(String::as_str), Some("save"));

		let merged = decorate(&attributes([("id", "x")]), &Attributes::new());
		assert!(!merged.contains_key("class"));
	}

	#[rstest]
	fn test_other_keys_keep_default_order() {
		let merged = decorate(
			&attributes([("title", "override"), ("role", "grid")]),
			&attributes([("id", "users"), ("title", "default")]),
		);
		let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["id", "title", "role"]);
		assert_eq!(merged.get("title").map(String::as_str), Some("override"));
	}

	#[rstest]
	fn test_irregular_whitespace() {
		let merged = decorate(
			&attributes([("class", "  a\tb  ")]),
			&attributes([("class", "")]),
		);
		assert_eq!(class_of(&merged), Some("a b"));
	}

	#[rstest]
	fn test_render_empty() {
		assert_eq!(render_attributes(&Attributes::new()), "");
	}

	fn class_list() -> impl Strategy<Value = Vec<String>> {
		prop::collection::vec(
			prop::sample::select(vec!["a", "b", "c", "d", "!a", "!c"]),
			0..6,
		)
		.prop_map(|tokens| tokens.into_iter().map(String::from).collect())
	}

	proptest! {
		#[test]
		fn prop_decorate_class_invariants(user in class_list(), defaults in class_list()) {
			let merged = decorate(
				&attributes([("class", user.join(" "))]),
				&attributes([("class", defaults.join(" "))]),
			);

			let output: Vec<&str> = merged
				.get("class")
				.map(|c| c.split(' ').collect())
				.unwrap_or_default();

			let all: Vec<&String> = defaults.iter().chain(user.iter()).collect();
			let excluded: Vec<&str> = all.iter().filter_map(|t| t.strip_prefix('!')).collect();

			for (i, token) in output.iter().enumerate() {
				prop_assert!(!token.is_empty());
				prop_assert!(!token.starts_with('!'));
				prop_assert!(!excluded.contains(token));
				prop_assert!(all.iter().any(|t| t.as_str() == *token));
				prop_assert!(!output[..i].contains(token));
			}

			for token in &all {
				if !token.starts_with('!') && !excluded.contains(&token.as_str()) {
					prop_assert!(output.contains(&token.as_str()));
				}
			}
		}
	}
}
