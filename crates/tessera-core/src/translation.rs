//! Translation seam for user-facing messages

use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Looks up the translation of a message key
///
/// Implementations fall back to returning the key itself when no translation
/// exists, so untranslated messages still render.
pub trait Translator: Send + Sync {
	/// Returns the translation for `key`
	fn translate(&self, key: &str) -> String;
}

/// Translator that returns every key unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
	fn translate(&self, key: &str) -> String {
		key.to_string()
	}
}

impl<S: BuildHasher + Send + Sync> Translator for HashMap<String, String, S> {
	fn translate(&self, key: &str) -> String {
		self.get(key).cloned().unwrap_or_else(|| key.to_string())
	}
}

impl<S: BuildHasher + Send + Sync> Translator for IndexMap<String, String, S> {
	fn translate(&self, key: &str) -> String {
		self.get(key).cloned().unwrap_or_else(|| key.to_string())
	}
}
