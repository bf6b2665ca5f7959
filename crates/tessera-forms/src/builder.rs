//! Form rendering

use crate::error::Result;
use crate::grid::FormGrid;
use crate::messages::MessageBag;
use serde::Serialize;
use tessera_core::layout::builtin_view;
use tessera_core::{Environment, RowAccessor};
use tessera_html::{Attributes, HtmlBuilder, attributes, decorate, render_attributes};

/// Name of the hidden CSRF token input
pub const TOKEN_NAME: &str = "_token";

/// A resolved control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlContext {
	/// Control name, also used as the label target
	pub name: String,
	/// Label text
	pub label: String,
	/// Widget HTML
	pub field: String,
	/// Text shown next to the widget
	pub inline_help: Option<String>,
	/// Text shown below the widget
	pub help: Option<String>,
	/// Whether the control has validation messages
	pub has_error: bool,
	/// First validation message formatted as HTML, empty without errors
	pub error: String,
}

/// A resolved fieldset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldsetContext {
	/// Legend
	pub name: Option<String>,
	/// Attribute string of the `<fieldset>` element
	pub attributes: String,
	/// Controls in registration order
	pub controls: Vec<ControlContext>,
}

/// Data handed to the form template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormContext {
	/// Attribute string of the `<form>` element
	pub form: String,
	/// Hidden CSRF input, when enabled and a token is available
	pub token: Option<String>,
	/// Hidden inputs
	pub hiddens: Vec<String>,
	/// Fieldsets
	pub fieldsets: Vec<FieldsetContext>,
	/// Translated submit button label
	pub submit_button: String,
	/// Template identifier
	pub view: String,
}

/// Renders a [`FormGrid`] with the templates of an [`Environment`]
///
/// # Example
///
/// ```rust
/// use serde_json::{Value, json};
/// use tessera_core::Environment;
/// use tessera_forms::{FieldType, FormBuilder, MessageBag, register_templates};
///
/// let mut env = Environment::default();
/// register_templates(env.templates_mut()).unwrap();
///
/// let errors: MessageBag = [("email", "The email must be valid.")].into_iter().collect();
/// let form = FormBuilder::make(&env, |form| {
///     form.with(json!({"email": "nope"}));
///     form.fieldset("Account", |fieldset| {
///         fieldset.typed_control(FieldType::Email, "email");
///     });
///     Ok(())
/// })
/// .unwrap()
/// .with_errors(errors)
/// .with_csrf_token("abc123");
///
/// let html = form.render().unwrap();
/// assert!(html.contains(r#"<div class="control-group error">"#));
/// assert!(html.contains(r#"<input type="hidden" name="_token" value="abc123">"#));
/// ```
pub struct FormBuilder<'env, R> {
	env: &'env Environment,
	grid: FormGrid<R>,
	errors: MessageBag,
	csrf_token: Option<String>,
}

impl<'env, R> FormBuilder<'env, R> {
	/// Wraps an already configured form grid
	pub fn new(env: &'env Environment, grid: FormGrid<R>) -> Self {
		Self {
			env,
			grid,
			errors: MessageBag::new(),
			csrf_token: None,
		}
	}

	/// Creates a form grid from the environment's form settings and
	/// configures it with `callback`
	pub fn make<F>(env: &'env Environment, callback: F) -> Result<Self>
	where
		F: FnOnce(&mut FormGrid<R>) -> Result<()>,
	{
		let mut grid = FormGrid::new(&env.settings().form);
		callback(&mut grid)?;
		Ok(Self::new(env, grid))
	}

	/// Configures the form further
	pub fn extend<F>(&mut self, callback: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut FormGrid<R>) -> Result<()>,
	{
		callback(&mut self.grid)?;
		Ok(self)
	}

	/// Attaches validation messages
	pub fn with_errors(mut self, errors: MessageBag) -> Self {
		self.errors = errors;
		self
	}

	/// Sets the CSRF token emitted when the form has tokens enabled
	pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
		self.csrf_token = Some(token.into());
		self
	}

	/// Validation messages
	pub fn errors(&self) -> &MessageBag {
		&self.errors
	}

	/// The form grid being rendered
	pub fn grid(&self) -> &FormGrid<R> {
		&self.grid
	}

	/// Mutable access to the form grid
	pub fn grid_mut(&mut self) -> &mut FormGrid<R> {
		&mut self.grid
	}

	/// Unwraps the form grid
	pub fn into_grid(self) -> FormGrid<R> {
		self.grid
	}

	fn form_attributes(&self) -> String {
		let view = self.grid.view();
		let layout_class = if view == builtin_view("form", "horizontal") {
			Some("form-horizontal")
		} else if view == builtin_view("form", "vertical") {
			Some("form-vertical")
		} else {
			None
		};
		match layout_class {
			Some(class) => render_attributes(&decorate(
				&attributes([("class", class)]),
				self.grid.attributes(),
			)),
			None => render_attributes(self.grid.attributes()),
		}
	}

	fn token(&self) -> Option<String> {
		if !self.grid.token() {
			return None;
		}
		match &self.csrf_token {
			Some(token) => {
				let html = HtmlBuilder::new();
				Some(html.create(
					"input",
					None,
					&attributes([("type", "hidden"), ("name", TOKEN_NAME), ("value", token.as_str())]),
				))
			}
			None => {
				tracing::warn!("form token enabled but no CSRF token was provided");
				None
			}
		}
	}
}

impl<R: RowAccessor> FormBuilder<'_, R> {
	/// Resolves the data handed to the template
	pub fn context(&self) -> FormContext {
		let grid = &self.grid;
		let row = grid.row();
		let none = Attributes::new();

		let hiddens = grid
			.hiddens()
			.iter()
			.map(|hidden| hidden.get_field(row, &none))
			.collect();

		let fieldsets = grid
			.fieldsets()
			.iter()
			.map(|fieldset| FieldsetContext {
				name: fieldset.name().map(str::to_string),
				attributes: render_attributes(fieldset.attributes()),
				controls: fieldset
					.controls()
					.iter()
					.map(|control| ControlContext {
						name: control.name().to_string(),
						label: control.label().to_string(),
						field: control.get_field(row, &none),
						inline_help: control.inline_help().map(str::to_string),
						help: control.help().map(str::to_string),
						has_error: self.errors.has(control.name()),
						error: self
							.errors
							.first(control.name(), Some(grid.error_message()))
							.unwrap_or_default(),
					})
					.collect(),
			})
			.collect();

		FormContext {
			form: self.form_attributes(),
			token: self.token(),
			hiddens,
			fieldsets,
			submit_button: self.env.translator().translate(grid.submit_button()),
			view: grid.view().to_string(),
		}
	}

	/// Renders the form with its view
	pub fn render(&self) -> Result<String> {
		let context = self.context();
		tracing::debug!(
			view = %context.view,
			fieldsets = context.fieldsets.len(),
			errors = self.errors.len(),
			"rendering form"
		);
		Ok(self.env.templates().render_serialize(&context.view, &context)?)
	}
}

impl<R> std::fmt::Debug for FormBuilder<'_, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormBuilder")
			.field("grid", &self.grid)
			.field("errors", &self.errors)
			.finish_non_exhaustive()
	}
}
