//! Field access over heterogeneous row representations
//!
//! Grids never know the concrete shape of their rows. A column asks the row
//! for a field by path (`"name"`, `"author.email"`, `"tags.0"`) and receives a
//! [`serde_json::Value`] it can turn into cell content.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Capability to read a named field out of a row
///
/// Paths are dot separated. Each segment is looked up as an object key, or as
/// an index when the current value is an array.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tessera_core::RowAccessor;
///
/// let row = json!({"name": "Alice", "roles": [{"title": "admin"}]});
///
/// assert_eq!(row.get_field("name"), Some(json!("Alice")));
/// assert_eq!(row.get_field("roles.0.title"), Some(json!("admin")));
/// assert_eq!(row.get_field("missing"), None);
/// ```
pub trait RowAccessor {
	/// Returns the value at `path`, or `None` when any segment is missing
	fn get_field(&self, path: &str) -> Option<Value>;
}

/// Walks `path` inside a JSON value
fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
	path.split('.').try_fold(value, |current, segment| match current {
		Value::Object(map) => map.get(segment),
		Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
		_ => None,
	})
}

/// Splits a path into its first segment and the remainder
fn split_head(path: &str) -> (&str, Option<&str>) {
	match path.split_once('.') {
		Some((head, rest)) => (head, Some(rest)),
		None => (path, None),
	}
}

impl RowAccessor for Value {
	fn get_field(&self, path: &str) -> Option<Value> {
		if path.is_empty() {
			return None;
		}
		lookup(self, path).cloned()
	}
}

impl RowAccessor for Map<String, Value> {
	fn get_field(&self, path: &str) -> Option<Value> {
		let (head, rest) = split_head(path);
		let value = self.get(head)?;
		match rest {
			Some(rest) => value.get_field(rest),
			None => Some(value.clone()),
		}
	}
}

impl<S: BuildHasher> RowAccessor for HashMap<String, Value, S> {
	fn get_field(&self, path: &str) -> Option<Value> {
		let (head, rest) = split_head(path);
		let value = self.get(head)?;
		match rest {
			Some(rest) => value.get_field(rest),
			None => Some(value.clone()),
		}
	}
}

impl<S: BuildHasher> RowAccessor for IndexMap<String, Value, S> {
	fn get_field(&self, path: &str) -> Option<Value> {
		let (head, rest) = split_head(path);
		let value = self.get(head)?;
		match rest {
			Some(rest) => value.get_field(rest),
			None => Some(value.clone()),
		}
	}
}

impl<T: RowAccessor + ?Sized> RowAccessor for &T {
	fn get_field(&self, path: &str) -> Option<Value> {
		(**self).get_field(path)
	}
}

impl<T: RowAccessor + ?Sized> RowAccessor for Box<T> {
	fn get_field(&self, path: &str) -> Option<Value> {
		(**self).get_field(path)
	}
}

/// Row wrapper for plain structs
///
/// The wrapped record is serialized once with `serde_json` and fields are read
/// from the resulting document.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use serde_json::json;
/// use tessera_core::{RowAccessor, Serialized};
///
/// #[derive(Serialize)]
/// struct User {
///     id: i32,
///     name: String,
/// }
///
/// let row = Serialized::new(User { id: 7, name: "Bob".into() }).unwrap();
/// assert_eq!(row.get_field("id"), Some(json!(7)));
/// assert_eq!(row.inner().name, "Bob");
/// ```
#[derive(Debug, Clone)]
pub struct Serialized<T> {
	inner: T,
	document: Value,
}

impl<T: Serialize> Serialized<T> {
	/// Wraps `inner`, serializing it for field lookups
	pub fn new(inner: T) -> serde_json::Result<Self> {
		let document = serde_json::to_value(&inner)?;
		Ok(Self { inner, document })
	}
}

impl<T> Serialized<T> {
	/// Returns the wrapped record
	pub fn inner(&self) -> &T {
		&self.inner
	}

	/// Unwraps the record
	pub fn into_inner(self) -> T {
		self.inner
	}
}

impl<T> RowAccessor for Serialized<T> {
	fn get_field(&self, path: &str) -> Option<Value> {
		self.document.get_field(path)
	}
}

/// Converts a field value into its display text
///
/// Strings are returned verbatim, `null` becomes an empty string, and every
/// other value uses its JSON representation.
///
/// ```rust
/// use serde_json::json;
/// use tessera_core::value_to_string;
///
/// assert_eq!(value_to_string(&json!("plain")), "plain");
/// assert_eq!(value_to_string(&json!(null)), "");
/// assert_eq!(value_to_string(&json!(42)), "42");
/// assert_eq!(value_to_string(&json!(true)), "true");
/// ```
pub fn value_to_string(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn sample() -> Value {
		json!({
			"id": 1,
			"name": "Alice",
			"profile": {"email": "alice@example.com", "tags": ["a", "b"]},
		})
	}

	#[rstest]
	#[case("id", Some(json!(1)))]
	#[case("name", Some(json!("Alice")))]
	#[case("profile.email", Some(json!("alice@example.com")))]
	#[case("profile.tags.1", Some(json!("b")))]
	#[case("profile.tags.9", None)]
	#[case("profile.missing", None)]
	#[case("name.first", None)]
	#[case("", None)]
	fn test_value_paths(#[case] path: &str, #[case] expected: Option<Value>) {
		assert_eq!(sample().get_field(path), expected);
	}

	#[rstest]
	fn test_hash_map_rows() {
		let mut row = HashMap::new();
		row.insert("name".to_string(), json!("Bob"));
		row.insert("address".to_string(), json!({"city": "Lyon"}));

		assert_eq!(row.get_field("name"), Some(json!("Bob")));
		assert_eq!(row.get_field("address.city"), Some(json!("Lyon")));
		assert_eq!(row.get_field("age"), None);
	}

	#[rstest]
	fn test_index_map_rows() {
		let mut row = IndexMap::new();
		row.insert("title".to_string(), json!("Draft"));

		assert_eq!(row.get_field("title"), Some(json!("Draft")));
	}

	#[rstest]
	fn test_json_map_rows() {
		let Value::Object(map) = sample() else {
			panic!("sample is an object");
		};
		assert_eq!(map.get_field("profile.tags.0"), Some(json!("a")));
	}

	#[rstest]
	fn test_serialized_record() {
		#[derive(Serialize)]
		struct Post {
			title: String,
			published: bool,
		}

		let row = Serialized::new(Post {
			title: "Hello".to_string(),
			published: false,
		})
		.unwrap();

		assert_eq!(row.get_field("title"), Some(json!("Hello")));
		assert_eq!(row.get_field("published"), Some(json!(false)));
		assert_eq!(row.into_inner().title, "Hello");
	}

	#[rstest]
	fn test_value_to_string_for_containers() {
		assert_eq!(value_to_string(&json!([1, 2])), "[1,2]");
		assert_eq!(value_to_string(&json!({"a": 1})), r#"{"a":1}"#);
		assert_eq!(value_to_string(&json!(1.5)), "1.5");
	}
}
