//! Form controls
//!
//! A [`Field`] renders one control of a fieldset. Unless a custom renderer is
//! configured, the widget is chosen by [`FieldType`] and filled with the
//! value read from the form's row.

use indexmap::IndexMap;
use std::fmt;
use tessera_core::{Identity, RowAccessor, value_to_string};
use tessera_html::{Attributes, Content, Expression, HtmlBuilder, attributes, escape, escape_attr};

/// Renders a control from the row, the control and call-time attributes
pub type FieldRenderer<R> = Box<dyn Fn(Option<&R>, &Field<R>, &Attributes) -> Content>;

/// Widget used by the default renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
	/// `<input type="text">`
	#[default]
	Text,
	/// `<input type="email">`
	Email,
	/// `<input type="password">`, never pre-filled
	Password,
	/// `<input type="hidden">`
	Hidden,
	/// `<textarea>`
	Textarea,
	/// `<select>` built from the control options
	Select,
	/// `<input type="checkbox">`, checked for `1`, `true` or `on`
	Checkbox,
}

impl FieldType {
	/// Parses a type name, accepting the `input:` prefix
	///
	/// ```rust
	/// use tessera_forms::FieldType;
	///
	/// assert_eq!(FieldType::parse("input:email"), Some(FieldType::Email));
	/// assert_eq!(FieldType::parse("select"), Some(FieldType::Select));
	/// assert_eq!(FieldType::parse("color"), None);
	/// ```
	pub fn parse(name: &str) -> Option<Self> {
		let name = name.trim().to_ascii_lowercase();
		let name = name.strip_prefix("input:").unwrap_or(&name);
		match name {
			"text" => Some(Self::Text),
			"email" => Some(Self::Email),
			"password" => Some(Self::Password),
			"hidden" => Some(Self::Hidden),
			"textarea" => Some(Self::Textarea),
			"select" => Some(Self::Select),
			"checkbox" => Some(Self::Checkbox),
			_ => None,
		}
	}

	/// Type name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Password => "password",
			Self::Hidden => "hidden",
			Self::Textarea => "textarea",
			Self::Select => "select",
			Self::Checkbox => "checkbox",
		}
	}
}

/// Where a control takes its value from
pub enum FieldValue<R> {
	/// Field of the row at a (dotted) path
	Row(String),
	/// Fixed value
	Fixed(String),
	/// Computed from the row
	Resolver(Box<dyn Fn(Option<&R>) -> String>),
}

impl<R> fmt::Debug for FieldValue<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Row(path) => f.debug_tuple("Row").field(path).finish(),
			Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
			Self::Resolver(_) => f.write_str("Resolver"),
		}
	}
}

/// A form control
pub struct Field<R> {
	name: String,
	label: String,
	field_type: FieldType,
	value: FieldValue<R>,
	options: IndexMap<String, String>,
	attributes: Attributes,
	inline_help: Option<String>,
	help: Option<String>,
	renderer: Option<FieldRenderer<R>>,
}

impl<R> Field<R> {
	pub(crate) fn from_identity(identity: Identity, field_type: FieldType) -> Self {
		Self {
			value: FieldValue::Row(identity.id.clone()),
			name: identity.id,
			label: identity.label,
			field_type,
			options: IndexMap::new(),
			attributes: Attributes::new(),
			inline_help: None,
			help: None,
			renderer: None,
		}
	}

	/// Control name, used as the `name` and `id` of the widget
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Label text
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Widget type
	pub fn field_type(&self) -> FieldType {
		self.field_type
	}

	/// Select options, value to label
	pub fn options(&self) -> &IndexMap<String, String> {
		&self.options
	}

	/// Widget attributes
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Help text shown next to the widget
	pub fn inline_help(&self) -> Option<&str> {
		self.inline_help.as_deref()
	}

	/// Help text shown below the widget
	pub fn help(&self) -> Option<&str> {
		self.help.as_deref()
	}

	/// Changes the name
	///
	/// The value keeps reading the row field it was configured with.
	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = name.into();
		self
	}

	/// Changes the label
	pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
		self.label = label.into();
		self
	}

	/// Changes the widget type
	pub fn set_type(&mut self, field_type: FieldType) -> &mut Self {
		self.field_type = field_type;
		self
	}

	/// Sets the select options
	pub fn set_options<I, K, V>(&mut self, options: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.options = options
			.into_iter()
			.map(|(value, label)| (value.into(), label.into()))
			.collect();
		self
	}

	/// Sets the widget attributes
	pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes = attributes;
		self
	}

	/// Reads the value from the row field at `path`
	pub fn set_field(&mut self, path: impl Into<String>) -> &mut Self {
		self.value = FieldValue::Row(path.into());
		self
	}

	/// Uses a fixed value
	pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.value = FieldValue::Fixed(value.into());
		self
	}

	/// Computes the value from the row
	pub fn set_value_with<F>(&mut self, resolver: F) -> &mut Self
	where
		F: Fn(Option<&R>) -> String + 'static,
	{
		self.value = FieldValue::Resolver(Box::new(resolver));
		self
	}

	/// Sets the inline help text
	pub fn set_inline_help(&mut self, help: impl Into<String>) -> &mut Self {
		self.inline_help = Some(help.into());
		self
	}

	/// Sets the block help text
	pub fn set_help(&mut self, help: impl Into<String>) -> &mut Self {
		self.help = Some(help.into());
		self
	}

	/// Replaces the default widget with a custom renderer
	pub fn set_field_with<F>(&mut self, renderer: F) -> &mut Self
	where
		F: Fn(Option<&R>, &Field<R>, &Attributes) -> Content + 'static,
	{
		self.renderer = Some(Box::new(renderer));
		self
	}
}

impl<R: RowAccessor> Field<R> {
	/// Current value of the control for `row`
	pub fn value(&self, row: Option<&R>) -> String {
		match &self.value {
			FieldValue::Row(path) => row
				.and_then(|row| row.get_field(path))
				.map(|value| value_to_string(&value))
				.unwrap_or_default(),
			FieldValue::Fixed(value) => value.clone(),
			FieldValue::Resolver(resolver) => resolver(row),
		}
	}

	/// Renders the control as HTML
	///
	/// `attributes` are merged over the control's own attributes. A custom
	/// renderer receives them as given.
	///
	/// ```rust
	/// use serde_json::{Value, json};
	/// use tessera_forms::Fieldset;
	/// use tessera_html::Attributes;
	///
	/// let mut fieldset: Fieldset<Value> = Fieldset::new(None);
	/// let control = fieldset.control("email");
	///
	/// let row = json!({"email": "a@b.c"});
	/// assert_eq!(
	///     control.get_field(Some(&row), &Attributes::new()),
	///     r#"<input type="text" name="email" id="email" value="a@b.c">"#
	/// );
	/// ```
	pub fn get_field(&self, row: Option<&R>, attributes: &Attributes) -> String {
		if let Some(renderer) = &self.renderer {
			return renderer(row, self, attributes).to_html();
		}

		let html = HtmlBuilder::new();
		let custom = html.decorate(attributes, &self.attributes);
		let value = self.value(row);

		match self.field_type {
			FieldType::Text | FieldType::Email | FieldType::Hidden => {
				let defaults = self.base_attributes([("value", value.as_str())]);
				html.create("input", None, &html.decorate(&custom, &defaults))
			}
			FieldType::Password => {
				let defaults = self.base_attributes([]);
				html.create("input", None, &html.decorate(&custom, &defaults))
			}
			FieldType::Checkbox => {
				let mut defaults = self.base_attributes([("value", "1")]);
				if matches!(value.as_str(), "1" | "true" | "on") {
					defaults.insert("checked".to_string(), "checked".to_string());
				}
				html.create("input", None, &html.decorate(&custom, &defaults))
			}
			FieldType::Textarea => {
				let defaults = attributes_of(&self.name);
				html.create("textarea", Some(value.into()), &html.decorate(&custom, &defaults))
			}
			FieldType::Select => {
				let defaults = attributes_of(&self.name);
				let options = self.render_options(&value);
				html.create("select", Some(Expression::new(options).into()), &html.decorate(&custom, &defaults))
			}
		}
	}

	fn base_attributes<const N: usize>(&self, extra: [(&str, &str); N]) -> Attributes {
		let mut base = attributes([("type", self.field_type.as_str())]);
		base.extend(attributes_of(&self.name));
		base.extend(attributes(extra));
		base
	}

	fn render_options(&self, selected: &str) -> String {
		self.options
			.iter()
			.map(|(value, label)| {
				let marker = if value == selected { r#" selected="selected""# } else { "" };
				format!(
					r#"<option value="{}"{}>{}</option>"#,
					escape_attr(value),
					marker,
					escape(label)
				)
			})
			.collect()
	}
}

fn attributes_of(name: &str) -> Attributes {
	attributes([("name", name), ("id", name)])
}

impl<R> fmt::Debug for Field<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("label", &self.label)
			.field("field_type", &self.field_type)
			.field("value", &self.value)
			.field("attributes", &self.attributes)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::{Value, json};

	fn field(name: &str, field_type: FieldType) -> Field<Value> {
		Field::from_identity(Identity::named(name), field_type)
	}

	#[rstest]
	#[case(FieldType::Text, r#"<input type="text" name="name" id="name" value="O&#x27;Brien &amp; co">"#)]
	#[case(FieldType::Email, r#"<input type="email" name="name" id="name" value="O&#x27;Brien &amp; co">"#)]
	#[case(FieldType::Hidden, r#"<input type="hidden" name="name" id="name" value="O&#x27;Brien &amp; co">"#)]
	#[case(FieldType::Password, r#"<input type="password" name="name" id="name">"#)]
	#[case(FieldType::Textarea, r#"<textarea name="name" id="name">O&#x27;Brien &amp; co</textarea>"#)]
	fn test_default_widgets(#[case] field_type: FieldType, #[case] expected: &str) {
		let row = json!({"name": "O'Brien & co"});
		let control = field("name", field_type);
		assert_eq!(control.get_field(Some(&row), &Attributes::new()), expected);
	}

	#[rstest]
	fn test_select_marks_current_option() {
		let mut control = field("role", FieldType::Select);
		control.set_options([("admin", "Administrator"), ("member", "Member <basic>")]);

		let html = control.get_field(Some(&json!({"role": "member"})), &Attributes::new());
		assert_eq!(
			html,
			concat!(
				r#"<select name="role" id="role">"#,
				r#"<option value="admin">Administrator</option>"#,
				r#"<option value="member" selected="selected">Member &lt;basic&gt;</option>"#,
				"</select>"
			)
		);
	}

	#[rstest]
	#[case(json!({"active": true}), true)]
	#[case(json!({"active": 1}), true)]
	#[case(json!({"active": false}), false)]
	#[case(json!({}), false)]
	fn test_checkbox_checked(#[case] row: Value, #[case] checked: bool) {
		let control = field("active", FieldType::Checkbox);
		let html = control.get_field(Some(&row), &Attributes::new());
		assert!(html.starts_with(r#"<input type="checkbox" name="active" id="active" value="1""#));
		assert_eq!(html.contains(r#"checked="checked""#), checked);
	}

	#[rstest]
	fn test_attributes_are_decorated() {
		let mut control = field("email", FieldType::Email);
		control.set_attributes(attributes([("class", "span4"), ("placeholder", "you@example.com")]));

		let html = control.get_field(None, &attributes([("class", "input-large !span4")]));
		assert_eq!(
			html,
			r#"<input type="email" name="email" id="email" value="" class="input-large" placeholder="you@example.com">"#
		);
	}

	#[rstest]
	fn test_value_sources() {
		let row = json!({"profile": {"city": "Oslo"}, "city": "Bergen"});
		let mut control = field("city", FieldType::Text);
		assert_eq!(control.value(Some(&row)), "Bergen");
		assert_eq!(control.value(None), "");

		control.set_field("profile.city");
		assert_eq!(control.value(Some(&row)), "Oslo");

		control.set_value("Fixed");
		assert_eq!(control.value(Some(&row)), "Fixed");

		control.set_value_with(|row: Option<&Value>| {
			row.map_or("new".to_string(), |_| "existing".to_string())
		});
		assert_eq!(control.value(None), "new");
		assert_eq!(control.value(Some(&row)), "existing");
	}

	#[rstest]
	fn test_custom_renderer() {
		let mut control = field("avatar", FieldType::Text);
		control.set_field_with(|_row, control, attributes| {
			Expression::new(format!(
				r#"<input type="file" name="{}" data-extra="{}">"#,
				control.name(),
				attributes.len()
			))
			.into()
		});

		let html = control.get_field(None, &attributes([("a", "1")]));
		assert_eq!(html, r#"<input type="file" name="avatar" data-extra="1">"#);
	}

	#[rstest]
	#[case(" Input:Password ", Some(FieldType::Password))]
	#[case("checkbox", Some(FieldType::Checkbox))]
	#[case("", None)]
	fn test_field_type_parse(#[case] input: &str, #[case] expected: Option<FieldType>) {
		assert_eq!(FieldType::parse(input), expected);
	}
}
