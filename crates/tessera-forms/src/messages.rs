//! Validation messages keyed by control name

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tessera_html::escape;

/// Collection of validation messages
///
/// # Example
///
/// ```rust
/// use tessera_forms::MessageBag;
///
/// let mut errors = MessageBag::new();
/// errors.add("email", "The email field is required.");
///
/// assert!(errors.has("email"));
/// assert_eq!(
///     errors.first("email", Some("<span>:message</span>")).as_deref(),
///     Some("<span>The email field is required.</span>")
/// );
/// assert_eq!(errors.first("name", None), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag {
	messages: IndexMap<String, Vec<String>>,
}

impl MessageBag {
	/// Creates an empty bag
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a message for `key`
	pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) -> &mut Self {
		self.messages.entry(key.into()).or_default().push(message.into());
		self
	}

	/// Returns `true` when `key` has at least one message
	pub fn has(&self, key: &str) -> bool {
		self.messages.get(key).is_some_and(|messages| !messages.is_empty())
	}

	/// Messages recorded for `key`
	pub fn get(&self, key: &str) -> &[String] {
		self.messages.get(key).map(Vec::as_slice).unwrap_or_default()
	}

	/// First message for `key`, as HTML
	///
	/// The message is always escaped. With a format, `:message` in the format
	/// is replaced by it and the rest of the format is emitted as markup.
	pub fn first(&self, key: &str, format: Option<&str>) -> Option<String> {
		let message = escape(self.get(key).first()?);
		Some(match format {
			Some(format) => format.replace(":message", &message),
			None => message,
		})
	}

	/// Keys that have messages
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.messages.keys().map(String::as_str)
	}

	/// Total number of messages
	pub fn len(&self) -> usize {
		self.messages.values().map(Vec::len).sum()
	}

	/// Returns `true` when there are no messages
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageBag {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut bag = Self::new();
		for (key, message) in iter {
			bag.add(key, message);
		}
		bag
	}
}
