//! Groups of form controls

use crate::error::{FormError, Result};
use crate::field::{Field, FieldType};
use std::collections::HashMap;
use std::fmt;
use tessera_core::Identity;
use tessera_html::Attributes;

/// A `<fieldset>` and the controls it holds
///
/// Controls are registered like table columns: by name, by label and field,
/// or anonymously with a callback.
pub struct Fieldset<R> {
	name: Option<String>,
	attributes: Attributes,
	controls: Vec<Field<R>>,
	key_map: HashMap<String, usize>,
}

impl<R> Fieldset<R> {
	/// Creates a fieldset, `name` becomes its legend
	pub fn new(name: Option<String>) -> Self {
		Self {
			name,
			attributes: Attributes::new(),
			controls: Vec::new(),
			key_map: HashMap::new(),
		}
	}

	/// Legend of the fieldset
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Attributes of the `<fieldset>` element
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Replaces the fieldset attributes
	pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes = attributes;
		self
	}

	/// Adds a text control named `name`
	pub fn control(&mut self, name: &str) -> &mut Field<R> {
		self.push_control(Identity::named(name), FieldType::Text)
	}

	/// Adds a control of `field_type` named `name`
	pub fn typed_control(&mut self, field_type: FieldType, name: &str) -> &mut Field<R> {
		self.push_control(Identity::named(name), field_type)
	}

	/// Adds a text control named `name` and configures it with `callback`
	pub fn control_with<F>(&mut self, name: &str, callback: F) -> &mut Field<R>
	where
		F: FnOnce(&mut Field<R>),
	{
		let control = self.push_control(Identity::named(name), FieldType::Text);
		callback(&mut *control);
		control
	}

	/// Adds a text control with an explicit label reading `field`
	pub fn labeled_control(&mut self, label: &str, field: &str) -> &mut Field<R> {
		self.push_control(Identity::labeled(label, field), FieldType::Text)
	}

	/// Adds a control without name or label, configured by `callback`
	pub fn anonymous_control<F>(&mut self, callback: F) -> &mut Field<R>
	where
		F: FnOnce(&mut Field<R>),
	{
		let control = self.push_control(Identity::anonymous(), FieldType::Text);
		callback(&mut *control);
		control
	}

	fn push_control(&mut self, identity: Identity, field_type: FieldType) -> &mut Field<R> {
		let index = self.controls.len();
		self.key_map.insert(identity.id.clone(), index);
		self.controls.push(Field::from_identity(identity, field_type));
		&mut self.controls[index]
	}

	/// Returns the control registered under `name`
	pub fn of(&mut self, name: &str) -> Result<&mut Field<R>> {
		let index = *self
			.key_map
			.get(name)
			.ok_or_else(|| FormError::ControlNotFound(name.to_string()))?;
		Ok(&mut self.controls[index])
	}

	/// Applies `callback` to the control registered under `name`
	pub fn of_with<F>(&mut self, name: &str, callback: F) -> Result<&mut Field<R>>
	where
		F: FnOnce(&mut Field<R>),
	{
		let control = self.of(name)?;
		callback(&mut *control);
		Ok(control)
	}

	/// Controls in registration order
	pub fn controls(&self) -> &[Field<R>] {
		&self.controls
	}
}

impl<R> fmt::Debug for Fieldset<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fieldset")
			.field("name", &self.name)
			.field("attributes", &self.attributes)
			.field("controls", &self.controls)
			.finish()
	}
}
