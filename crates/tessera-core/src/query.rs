//! Request query string input

use crate::error::Result;
use indexmap::IndexMap;

/// Ordered query string parameters of the current request
///
/// Grids read their search keyword, sort column/direction and page number
/// from here, and the pagination links re-append everything except the page
/// parameter.
///
/// # Example
///
/// ```rust
/// use tessera_core::QueryParams;
///
/// let query = QueryParams::parse("q=alice&order_by=name&page=2").unwrap();
/// assert_eq!(query.input("q"), Some("alice"));
/// assert_eq!(query.except(&["page"]).to_query_string(), "q=alice&order_by=name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: IndexMap<String, String>,
}

impl QueryParams {
	/// Creates an empty parameter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses an `application/x-www-form-urlencoded` query string
	///
	/// A leading `?` is ignored. Repeated keys keep the last value.
	pub fn parse(query: &str) -> Result<Self> {
		let query = query.strip_prefix('?').unwrap_or(query);
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
		Ok(pairs.into_iter().collect())
	}

	/// Returns the value of `key`
	pub fn input(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}

	/// Returns the value of `key` only when it is present and non-blank
	pub fn filled(&self, key: &str) -> Option<&str> {
		self.input(key).filter(|value| !value.trim().is_empty())
	}

	/// Sets `key` to `value`
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.params.insert(key.into(), value.into());
	}

	/// Returns a copy without the given keys
	pub fn except(&self, keys: &[&str]) -> Self {
		self.params
			.iter()
			.filter(|(key, _)| !keys.contains(&key.as_str()))
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect()
	}

	/// Iterates over the parameters in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of parameters
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Returns `true` when there are no parameters
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	/// Encodes the parameters back into a query string (without `?`)
	pub fn to_query_string(&self) -> String {
		let pairs: Vec<(&str, &str)> = self.iter().collect();
		// Encoding string pairs cannot fail
		serde_urlencoded::to_string(pairs).unwrap_or_default()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			params: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
