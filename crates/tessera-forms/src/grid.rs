//! Form grid configuration

use crate::error::{FormError, Result};
use crate::field::{Field, FieldType};
use crate::fieldset::Fieldset;
use std::fmt;
use tessera_core::{FormSettings, Identity, Layout};
use tessera_html::Attributes;

/// Declarative description of a form
///
/// A `FormGrid` owns the row the controls read their values from, the
/// fieldsets and hidden fields, and the presentation options seeded from
/// [`FormSettings`].
///
/// # Example
///
/// ```rust
/// use serde_json::{Value, json};
/// use tessera_core::FormSettings;
/// use tessera_forms::{FieldType, FormGrid};
///
/// let mut form: FormGrid<Value> = FormGrid::new(&FormSettings::default());
/// form.with(json!({"id": 7, "email": "ann@example.com"}));
/// form.hidden("id");
/// form.fieldset("Account", |fieldset| {
///     fieldset.typed_control(FieldType::Email, "email");
/// });
///
/// assert_eq!(form.fieldsets().len(), 1);
/// assert_eq!(form.view(), "tessera/form/horizontal.html");
/// ```
pub struct FormGrid<R> {
	row: Option<R>,
	fieldsets: Vec<Fieldset<R>>,
	hiddens: Vec<Field<R>>,
	attributes: Attributes,
	view: String,
	submit_button: String,
	error_message: String,
	token: bool,
}

impl<R> FormGrid<R> {
	/// Creates a form grid seeded with `settings`
	pub fn new(settings: &FormSettings) -> Self {
		Self {
			row: None,
			fieldsets: Vec::new(),
			hiddens: Vec::new(),
			attributes: settings.attributes.clone(),
			view: settings.view.clone(),
			submit_button: settings.submit_button.clone(),
			error_message: settings.error_message.clone(),
			token: settings.token,
		}
	}

	/// Sets the row controls read their values from
	pub fn with(&mut self, row: R) -> &mut Self {
		self.row = Some(row);
		self
	}

	/// Replaces (or clears) the row
	pub fn set_row(&mut self, row: Option<R>) -> &mut Self {
		self.row = row;
		self
	}

	/// The row, if any
	pub fn row(&self) -> Option<&R> {
		self.row.as_ref()
	}

	/// Adds a fieldset with a legend
	pub fn fieldset<F>(&mut self, name: &str, callback: F) -> &mut Fieldset<R>
	where
		F: FnOnce(&mut Fieldset<R>),
	{
		self.push_fieldset(Some(name.to_string()), callback)
	}

	/// Adds a fieldset without a legend
	pub fn anonymous_fieldset<F>(&mut self, callback: F) -> &mut Fieldset<R>
	where
		F: FnOnce(&mut Fieldset<R>),
	{
		self.push_fieldset(None, callback)
	}

	fn push_fieldset<F>(&mut self, name: Option<String>, callback: F) -> &mut Fieldset<R>
	where
		F: FnOnce(&mut Fieldset<R>),
	{
		let index = self.fieldsets.len();
		self.fieldsets.push(Fieldset::new(name));
		let fieldset = &mut self.fieldsets[index];
		callback(&mut *fieldset);
		fieldset
	}

	/// Returns the fieldset whose legend is `name`
	pub fn of(&mut self, name: &str) -> Result<&mut Fieldset<R>> {
		self.fieldsets
			.iter_mut()
			.find(|fieldset| fieldset.name() == Some(name))
			.ok_or_else(|| FormError::FieldsetNotFound(name.to_string()))
	}

	/// Fieldsets in registration order
	pub fn fieldsets(&self) -> &[Fieldset<R>] {
		&self.fieldsets
	}

	/// Adds a hidden field named `name`
	pub fn hidden(&mut self, name: &str) -> &mut Field<R> {
		let index = self.hiddens.len();
		self.hiddens
			.push(Field::from_identity(Identity::named(name), FieldType::Hidden));
		&mut self.hiddens[index]
	}

	/// Adds a hidden field named `name` and configures it with `callback`
	pub fn hidden_with<F>(&mut self, name: &str, callback: F) -> &mut Field<R>
	where
		F: FnOnce(&mut Field<R>),
	{
		let hidden = self.hidden(name);
		callback(&mut *hidden);
		hidden
	}

	/// Hidden fields in registration order
	pub fn hiddens(&self) -> &[Field<R>] {
		&self.hiddens
	}

	/// Attributes of the `<form>` element
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Replaces the form attributes
	pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes = attributes;
		self
	}

	/// Merges `attributes` into the form attributes
	pub fn merge_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes.extend(attributes);
		self
	}

	/// Sets a single form attribute
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Selects the layout, `horizontal`, `vertical` or a template identifier
	pub fn layout(&mut self, name: &str) -> &mut Self {
		self.view = Layout::parse(name).view("form");
		self
	}

	/// Template identifier
	pub fn view(&self) -> &str {
		&self.view
	}

	/// Label of the submit button
	pub fn submit_button(&self) -> &str {
		&self.submit_button
	}

	/// Replaces the submit button label
	pub fn set_submit_button(&mut self, label: impl Into<String>) -> &mut Self {
		self.submit_button = label.into();
		self
	}

	/// Markup wrapping the first error of a control
	pub fn error_message(&self) -> &str {
		&self.error_message
	}

	/// Replaces the error markup, `:message` marks the message position
	pub fn set_error_message(&mut self, format: impl Into<String>) -> &mut Self {
		self.error_message = format.into();
		self
	}

	/// Whether a CSRF token field is emitted
	pub fn token(&self) -> bool {
		self.token
	}

	/// Enables or disables the CSRF token field
	pub fn set_token(&mut self, token: bool) -> &mut Self {
		self.token = token;
		self
	}
}

impl<R> fmt::Debug for FormGrid<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormGrid")
			.field("has_row", &self.row.is_some())
			.field("fieldsets", &self.fieldsets)
			.field("hiddens", &self.hiddens)
			.field("attributes", &self.attributes)
			.field("view", &self.view)
			.field("submit_button", &self.submit_button)
			.field("token", &self.token)
			.finish()
	}
}
