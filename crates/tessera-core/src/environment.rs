//! Application scoped services handed to the renderers

use crate::settings::Settings;
use crate::template::Templates;
use crate::translation::{NullTranslator, Translator};

/// Settings, templates and translator shared by every render
///
/// Build it once at startup and pass it by reference (or behind an `Arc`) to
/// the table and form builders.
pub struct Environment {
	settings: Settings,
	templates: Templates,
	translator: Box<dyn Translator>,
}

impl Environment {
	/// Creates an environment with an empty template registry and a
	/// pass-through translator
	pub fn new(settings: Settings) -> Self {
		Self {
			settings,
			templates: Templates::new(),
			translator: Box::new(NullTranslator),
		}
	}

	/// Replaces the translator
	pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
		self.translator = Box::new(translator);
		self
	}

	/// Returns the settings
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Returns the template registry
	pub fn templates(&self) -> &Templates {
		&self.templates
	}

	/// Returns the template registry for registering application views
	pub fn templates_mut(&mut self) -> &mut Templates {
		&mut self.templates
	}

	/// Returns the translator
	pub fn translator(&self) -> &dyn Translator {
		self.translator.as_ref()
	}
}

impl Default for Environment {
	fn default() -> Self {
		Self::new(Settings::default())
	}
}

impl std::fmt::Debug for Environment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Environment")
			.field("settings", &self.settings)
			.field("templates", &self.templates)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	#[rstest]
	fn test_translator_override() {
		let mut catalog = HashMap::new();
		catalog.insert("Submit".to_string(), "Envoyer".to_string());

		let env = Environment::default().with_translator(catalog);
		assert_eq!(env.translator().translate("Submit"), "Envoyer");
		assert_eq!(env.translator().translate("No records"), "No records");
	}
}
