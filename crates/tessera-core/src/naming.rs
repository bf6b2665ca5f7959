//! Id and label dispatch for columns and form controls
//!
//! Both `Grid::column` and `Fieldset::control` accept the same three shapes
//! of arguments:
//!
//! | arguments                 | id                      | label                    |
//! |---------------------------|-------------------------|--------------------------|
//! | callback only             | `""`                    | `""`                     |
//! | label + field name        | lower-cased field name  | label as given           |
//! | name (+ optional callback)| lower-cased name        | title-cased id           |

/// Resolved identity of a newly registered column or control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
	/// Identifier, used for field lookup and `of` access
	pub id: String,
	/// Human readable label
	pub label: String,
}

impl Identity {
	/// Identity for a definition registered with a callback only
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Identity for a definition registered by name
	///
	/// ```rust
	/// use tessera_core::Identity;
	///
	/// let identity = Identity::named("First Name");
	/// assert_eq!(identity.id, "first name");
	/// assert_eq!(identity.label, "First Name");
	/// ```
	pub fn named(name: &str) -> Self {
		let id = name.to_lowercase();
		let label = title_case(&id);
		Self { id, label }
	}

	/// Identity for a definition registered with an explicit label and field
	///
	/// ```rust
	/// use tessera_core::Identity;
	///
	/// let identity = Identity::labeled("User Name", "UserName");
	/// assert_eq!(identity.id, "username");
	/// assert_eq!(identity.label, "User Name");
	/// ```
	pub fn labeled(label: &str, field: &str) -> Self {
		Self {
			id: field.to_lowercase(),
			label: label.to_string(),
		}
	}
}

/// Upper-cases the first character of every space separated word
///
/// Only spaces split words, so `first_name` stays a single word.
///
/// ```rust
/// use tessera_core::naming::title_case;
///
/// assert_eq!(title_case("email address"), "Email Address");
/// assert_eq!(title_case("first_name"), "First_name");
/// ```
pub fn title_case(value: &str) -> String {
	let mut result = String::with_capacity(value.len());
	let mut at_word_start = true;
	for ch in value.chars() {
		if at_word_start {
			result.extend(ch.to_uppercase());
		} else {
			result.push(ch);
		}
		at_word_start = matches!(ch, ' ' | '\t' | '\r' | '\n');
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("id", "id", "Id")]
	#[case("Username", "username", "Username")]
	#[case("CREATED AT", "created at", "Created At")]
	#[case("über", "über", "Über")]
	fn test_named(#[case] name: &str, #[case] id: &str, #[case] label: &str) {
		let identity = Identity::named(name);
		assert_eq!(identity.id, id);
		assert_eq!(identity.label, label);
	}

	#[rstest]
	fn test_labeled_keeps_label_verbatim() {
		let identity = Identity::labeled("Foo2", "FOO2");
		assert_eq!(identity.id, "foo2");
		assert_eq!(identity.label, "Foo2");
	}

	#[rstest]
	fn test_anonymous_is_empty() {
		let identity = Identity::anonymous();
		assert!(identity.id.is_empty());
		assert!(identity.label.is_empty());
	}

	#[rstest]
	fn test_title_case_multiple_spaces() {
		assert_eq!(title_case("a  b"), "A  B");
		assert_eq!(title_case(""), "");
	}
}
