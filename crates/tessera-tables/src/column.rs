//! Table column definitions
//!
//! A [`Column`] knows its id, its header label, how to produce the content of
//! each cell and which attributes to put on that cell. Columns are created by
//! the `Grid` registration methods and tweaked through the registration
//! callback or `Grid::of`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use tessera_core::{Identity, RowAccessor};
use tessera_html::{Attributes, Content};

/// Produces the content of a cell
pub type ValueResolver<R> = Box<dyn Fn(&R) -> Content>;

/// Produces the attributes of a cell or row
pub type AttributeResolver<R> = Box<dyn Fn(&R) -> Attributes>;

/// How a column obtains the content of its cells
pub enum ColumnValue<R> {
	/// Field of the row at a (dotted) path
	Field(String),
	/// Same content in every row
	Fixed(Content),
	/// Computed from the row
	Resolver(ValueResolver<R>),
}

impl<R> Debug for ColumnValue<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(path) => f.debug_tuple("Field").field(path).finish(),
			Self::Fixed(content) => f.debug_tuple("Fixed").field(content).finish(),
			Self::Resolver(_) => f.write_str("Resolver"),
		}
	}
}

/// Reads the field at `path` from `row`, the default cell value
///
/// ```rust
/// use serde_json::json;
/// use tessera_tables::field_value;
///
/// let row = json!({"user": {"name": "Alice"}});
/// assert_eq!(field_value(&row, "user.name").as_str(), "Alice");
/// assert!(field_value(&row, "missing").is_empty());
/// ```
pub fn field_value<R: RowAccessor>(row: &R, path: &str) -> Content {
	Content::from(row.get_field(path))
}

/// Attribute resolver used until one is configured
pub fn no_attributes<R>(_row: &R) -> Attributes {
	Attributes::new()
}

/// Serializable id/label pair describing a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
	/// Column id
	pub id: String,
	/// Header label
	pub label: String,
}

/// A table column
pub struct Column<R> {
	id: String,
	label: String,
	value: ColumnValue<R>,
	attributes: Option<AttributeResolver<R>>,
	headers: Vec<String>,
}

impl<R> Column<R> {
	pub(crate) fn from_identity(identity: Identity) -> Self {
		let value = if identity.id.is_empty() {
			ColumnValue::Fixed(Content::empty())
		} else {
			ColumnValue::Field(identity.id.clone())
		};

		Self {
			id: identity.id,
			label: identity.label,
			value,
			attributes: None,
			headers: Vec::new(),
		}
	}

	/// Column id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// CSS classes of the header cell
	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	/// How cell content is produced
	pub fn value_kind(&self) -> &ColumnValue<R> {
		&self.value
	}

	/// Changes the id
	///
	/// The value keeps reading the field it was configured with, use
	/// [`set_field`](Self::set_field) to read another one.
	pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
		self.id = id.into();
		self
	}

	/// Changes the header label
	pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
		self.label = label.into();
		self
	}

	/// Reads cells from the field at `path`
	pub fn set_field(&mut self, path: impl Into<String>) -> &mut Self {
		self.value = ColumnValue::Field(path.into());
		self
	}

	/// Shows the same content in every cell
	pub fn set_value(&mut self, value: impl Into<Content>) -> &mut Self {
		self.value = ColumnValue::Fixed(value.into());
		self
	}

	/// Computes cell content from the row
	pub fn set_value_with<F>(&mut self, resolver: F) -> &mut Self
	where
		F: Fn(&R) -> Content + 'static,
	{
		self.value = ColumnValue::Resolver(Box::new(resolver));
		self
	}

	/// Computes cell attributes from the row
	pub fn set_attributes_with<F>(&mut self, resolver: F) -> &mut Self
	where
		F: Fn(&R) -> Attributes + 'static,
	{
		self.attributes = Some(Box::new(resolver));
		self
	}

	/// Sets the CSS classes of the header cell
	pub fn set_headers<I, S>(&mut self, headers: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.headers = headers.into_iter().map(Into::into).collect();
		self
	}

	/// Attributes of the cell for `row`
	pub fn attributes(&self, row: &R) -> Attributes {
		match &self.attributes {
			Some(resolver) => resolver(row),
			None => no_attributes(row),
		}
	}

	/// Id/label pair of this column
	pub fn definition(&self) -> ColumnDefinition {
		ColumnDefinition {
			id: self.id.clone(),
			label: self.label.clone(),
		}
	}
}

impl<R: RowAccessor> Column<R> {
	/// Content of the cell for `row`
	pub fn value(&self, row: &R) -> Content {
		match &self.value {
			ColumnValue::Field(path) => field_value(row, path),
			ColumnValue::Fixed(content) => content.clone(),
			ColumnValue::Resolver(resolver) => resolver(row),
		}
	}
}

impl<R> Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("value", &self.value)
			.field("headers", &self.headers)
			.finish_non_exhaustive()
	}
}
