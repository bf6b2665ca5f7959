//! Grid configuration
//!
//! The grid owns the columns and row source of a table. It is configured
//! once per request and handed to [`TableBuilder`](crate::TableBuilder).

use crate::column::{AttributeResolver, Column, ColumnDefinition, no_attributes};
use crate::error::{Result, TableError};
use crate::model::{Model, QueryBuilder, SearchFilter, SortDirection};
use crate::pagination::{DEFAULT_PER_PAGE, Paginator, PerPage};
use serde::Serialize;
use std::collections::HashMap;
use tessera_core::{Identity, Layout, QueryParams, TableSettings};
use tessera_html::Attributes;

/// Query string parameter read by a filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterParam {
	/// Parameter name
	pub key: String,
	/// Value found in the request
	pub value: Option<String>,
}

impl FilterParam {
	fn read(query: &QueryParams, key: &str) -> Self {
		Self {
			key: key.to_string(),
			value: query.input(key).map(String::from),
		}
	}

	fn filled(&self) -> Option<&str> {
		self.value
			.as_deref()
			.map(str::trim)
			.filter(|value| !value.is_empty())
	}
}

/// Search configuration recorded by [`Grid::searchable`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
	/// Fields searched
	pub fields: Vec<String>,
	/// Keyword parameter
	pub keyword: FilterParam,
}

/// Sort configuration recorded by [`Grid::sortable`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
	/// Field parameter
	pub order_by: FilterParam,
	/// Direction parameter
	pub direction: FilterParam,
}

/// Table grid
///
/// # Example
///
/// ```rust
/// use serde_json::{Value, json};
/// use tessera_core::{QueryParams, TableSettings};
/// use tessera_tables::{Grid, Model};
///
/// let mut grid: Grid<Value> = Grid::new(&TableSettings::default(), QueryParams::new());
/// grid.with(Model::Rows(vec![json!({"id": 1})]), false);
/// grid.column("id");
///
/// assert_eq!(grid.columns()[0].label(), "Id");
/// assert_eq!(grid.rows().unwrap().len(), 1);
/// assert!(!grid.paginated());
/// ```
pub struct Grid<R> {
	columns: Vec<Column<R>>,
	key_map: HashMap<String, usize>,
	model: Option<Model<R>>,
	rows: Vec<R>,
	row_attributes: Option<AttributeResolver<R>>,
	paginate: bool,
	per_page: Option<usize>,
	page_name: String,
	empty: String,
	view: String,
	attributes: Attributes,
	query: QueryParams,
	search: Option<SearchState>,
	sort: Option<SortState>,
}

impl<R> Grid<R> {
	/// Creates a grid with the configured defaults and the current request's
	/// query parameters
	pub fn new(settings: &TableSettings, query: QueryParams) -> Self {
		Self {
			columns: Vec::new(),
			key_map: HashMap::new(),
			model: None,
			rows: Vec::new(),
			row_attributes: None,
			paginate: false,
			per_page: settings.per_page,
			page_name: settings.page_name.clone(),
			empty: settings.empty.clone(),
			view: settings.view.clone(),
			attributes: settings.attributes.clone(),
			query,
			search: None,
			sort: None,
		}
	}

	/// Attaches a row source
	///
	/// Nothing is fetched here. The source is resolved on the first
	/// [`rows`](Self::rows) call, as a page when `paginate` is set.
	pub fn with(&mut self, model: impl Into<Model<R>>, paginate: bool) -> &mut Self {
		self.model = Some(model.into());
		self.paginate = paginate;
		self
	}

	/// Row source, replaced by its resolved form once rows have been read
	pub fn model(&self) -> Option<&Model<R>> {
		self.model.as_ref()
	}

	/// Assigns rows directly, bypassing the model
	pub fn set_rows(&mut self, rows: Vec<R>) -> &mut Self {
		self.rows = rows;
		self
	}

	/// Adds a column named `name`
	///
	/// The id is the lower-cased name and the label its title-cased form.
	pub fn column(&mut self, name: &str) -> &mut Column<R> {
		self.push_column(Identity::named(name))
	}

	/// Adds a column named `name` and configures it with `callback`
	pub fn column_with<F>(&mut self, name: &str, callback: F) -> &mut Column<R>
	where
		F: FnOnce(&mut Column<R>),
	{
		let column = self.push_column(Identity::named(name));
		callback(&mut *column);
		column
	}

	/// Adds a column with an explicit header label reading `field`
	pub fn labeled_column(&mut self, label: &str, field: &str) -> &mut Column<R> {
		self.push_column(Identity::labeled(label, field))
	}

	/// Adds a column without id or label, configured by `callback`
	pub fn anonymous_column<F>(&mut self, callback: F) -> &mut Column<R>
	where
		F: FnOnce(&mut Column<R>),
	{
		let column = self.push_column(Identity::anonymous());
		callback(&mut *column);
		column
	}

	// The id is mapped as registered, a callback renaming the column does
	// not change the mapping
	fn push_column(&mut self, identity: Identity) -> &mut Column<R> {
		let index = self.columns.len();
		self.key_map.insert(identity.id.clone(), index);
		self.columns.push(Column::from_identity(identity));
		&mut self.columns[index]
	}

	/// Returns the column registered under `id`
	///
	/// When several columns were registered with the same id, the latest one
	/// is returned.
	pub fn of(&mut self, id: &str) -> Result<&mut Column<R>> {
		let index = *self
			.key_map
			.get(id)
			.ok_or_else(|| TableError::ColumnNotFound(id.to_string()))?;
		Ok(&mut self.columns[index])
	}

	/// Applies `callback` to the column registered under `id`
	pub fn of_with<F>(&mut self, id: &str, callback: F) -> Result<&mut Column<R>>
	where
		F: FnOnce(&mut Column<R>),
	{
		let column = self.of(id)?;
		callback(&mut *column);
		Ok(column)
	}

	/// Columns in registration order
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Id/label pairs of every column
	pub fn definitions(&self) -> Vec<ColumnDefinition> {
		self.columns.iter().map(Column::definition).collect()
	}

	/// Registers a column for each definition
	///
	/// Ids are kept exactly as given, so definitions read back from
	/// [`definitions`](Self::definitions) rebuild the same columns.
	pub fn define<I>(&mut self, definitions: I) -> &mut Self
	where
		I: IntoIterator<Item = ColumnDefinition>,
	{
		for definition in definitions {
			self.push_column(Identity {
				id: definition.id,
				label: definition.label,
			});
		}
		self
	}

	/// Turns pagination on or off, optionally with a page size
	///
	/// ```rust
	/// use serde_json::Value;
	/// use tessera_core::{QueryParams, TableSettings};
	/// use tessera_tables::Grid;
	///
	/// let mut grid: Grid<Value> = Grid::new(&TableSettings::default(), QueryParams::new());
	/// grid.paginate(20);
	/// assert!(grid.paginated());
	/// assert_eq!(grid.per_page(), Some(20));
	///
	/// grid.paginate(-1);
	/// assert!(!grid.paginated());
	/// assert_eq!(grid.per_page(), None);
	/// ```
	pub fn paginate(&mut self, value: impl Into<PerPage>) -> &mut Self {
		let (paginate, per_page) = value.into().resolve();
		self.paginate = paginate;
		self.per_page = per_page;
		self
	}

	/// Whether rows are paginated
	pub fn paginated(&self) -> bool {
		self.paginate
	}

	/// Configured page size
	pub fn per_page(&self) -> Option<usize> {
		self.per_page
	}

	/// Query string key carrying the page number
	pub fn page_name(&self) -> &str {
		&self.page_name
	}

	/// Requested page, defaulting to the first
	pub fn current_page(&self) -> usize {
		match self.query.input(&self.page_name) {
			None => 1,
			Some(raw) => match raw.trim().parse::<usize>() {
				Ok(page) if page >= 1 => page,
				_ => {
					tracing::warn!(
						page = raw,
						page_name = %self.page_name,
						"ignoring invalid page number"
					);
					1
				}
			},
		}
	}

	/// Selects the template, `horizontal`/`vertical` or a custom identifier
	pub fn layout(&mut self, name: &str) -> &mut Self {
		self.view = Layout::parse(name).view("table");
		self
	}

	/// Template identifier
	pub fn view(&self) -> &str {
		&self.view
	}

	/// Message shown when there are no rows
	pub fn empty(&self) -> &str {
		&self.empty
	}

	/// Changes the message shown when there are no rows
	pub fn set_empty(&mut self, empty: impl Into<String>) -> &mut Self {
		self.empty = empty.into();
		self
	}

	/// Attributes of the `<table>` element
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Replaces the table attributes
	pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes = attributes;
		self
	}

	/// Merges into the table attributes, the new values winning
	pub fn merge_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes.extend(attributes);
		self
	}

	/// Sets a single table attribute
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Computes `<tr>` attributes from each row
	pub fn row_attributes<F>(&mut self, resolver: F) -> &mut Self
	where
		F: Fn(&R) -> Attributes + 'static,
	{
		self.row_attributes = Some(Box::new(resolver));
		self
	}

	/// Attributes of the `<tr>` element for `row`
	pub fn attributes_of_row(&self, row: &R) -> Attributes {
		match &self.row_attributes {
			Some(resolver) => resolver(row),
			None => no_attributes(row),
		}
	}

	/// Query parameters of the current request
	pub fn query(&self) -> &QueryParams {
		&self.query
	}

	/// Applies the keyword found under `key` to the query
	///
	/// Requires a [`Model::Query`] source. A missing or blank keyword leaves
	/// the query untouched, the state is recorded either way.
	pub fn searchable(&mut self, fields: &[&str], key: &str) -> Result<&mut Self> {
		let query = self.take_query_builder()?;
		let fields: Vec<String> = fields.iter().map(|field| field.to_string()).collect();
		let keyword = FilterParam::read(&self.query, key);

		let query = match keyword.filled() {
			Some(value) => {
				tracing::debug!(keyword = value, fields = ?fields, "applying search filter");
				query.search(SearchFilter::new(value, fields.clone()))
			}
			None => query,
		};

		self.model = Some(Model::Query(query));
		self.search = Some(SearchState { fields, keyword });
		Ok(self)
	}

	/// [`searchable`](Self::searchable) reading the `q` parameter
	pub fn search(&mut self, fields: &[&str]) -> Result<&mut Self> {
		self.searchable(fields, "q")
	}

	/// Applies the ordering found under `order_key`/`direction_key`
	///
	/// Requires a [`Model::Query`] source. Without a field the query is left
	/// unordered.
	pub fn sortable(&mut self, order_key: &str, direction_key: &str) -> Result<&mut Self> {
		let query = self.take_query_builder()?;
		let order_by = FilterParam::read(&self.query, order_key);
		let direction = FilterParam::read(&self.query, direction_key);

		let query = match order_by.filled() {
			Some(column) => {
				let sort = SortDirection::parse(direction.value.as_deref());
				tracing::debug!(column, direction = sort.as_str(), "applying sort order");
				query.order_by(column, sort)
			}
			None => query,
		};

		self.model = Some(Model::Query(query));
		self.sort = Some(SortState { order_by, direction });
		Ok(self)
	}

	/// [`sortable`](Self::sortable) reading `order_by` and `direction`
	pub fn sort(&mut self) -> Result<&mut Self> {
		self.sortable("order_by", "direction")
	}

	/// Recorded search configuration
	pub fn search_state(&self) -> Option<&SearchState> {
		self.search.as_ref()
	}

	/// Recorded sort configuration
	pub fn sort_state(&self) -> Option<&SortState> {
		self.sort.as_ref()
	}

	fn take_query_builder(&mut self) -> Result<Box<dyn QueryBuilder<R>>> {
		match self.model.take() {
			Some(Model::Query(query)) => Ok(query),
			other => {
				let kind = other.as_ref().map_or("none", Model::kind);
				self.model = other;
				Err(TableError::QueryBuilderRequired(kind.to_string()))
			}
		}
	}
}

impl<R: Clone> Grid<R> {
	/// Rows to display
	///
	/// Rows assigned with [`set_rows`](Self::set_rows) win. Otherwise the
	/// model is resolved on the first call and cached.
	pub fn rows(&mut self) -> Result<&[R]> {
		if self.rows.is_empty() {
			self.build_rows_from_model()?;
		}
		Ok(&self.rows)
	}

	fn build_rows_from_model(&mut self) -> Result<()> {
		let page = self.current_page();
		let per_page = self.per_page;

		let resolved = match self.model.as_ref() {
			None => {
				return Err(TableError::RowConversion("no model attached".to_string()));
			}
			Some(Model::Query(query)) if self.paginate => Some(Model::Paginated(
				query
					.paginate(per_page, page)?
					.with_page_name(self.page_name.clone()),
			)),
			Some(Model::Query(query)) => Some(Model::Rows(query.get()?)),
			Some(Model::Rows(rows)) if self.paginate => Some(self.paginate_in_memory(rows.clone(), page)),
			Some(Model::Collection(collection)) if self.paginate => {
				Some(self.paginate_in_memory(collection.to_rows(), page))
			}
			Some(_) => None,
		};

		if let Some(model) = resolved {
			self.model = Some(model);
		}

		let (kind, rows) = match self.model.as_ref() {
			Some(Model::Paginated(paginator)) => {
				self.paginate = true;
				("paginator", paginator.items().to_vec())
			}
			Some(Model::Collection(collection)) => ("collection", collection.to_rows()),
			Some(Model::Rows(rows)) => ("rows", rows.clone()),
			Some(Model::Query(_)) | None => {
				return Err(TableError::RowConversion(
					"model did not resolve to rows".to_string(),
				));
			}
		};

		tracing::debug!(source = kind, rows = rows.len(), "materialized grid rows");
		self.rows = rows;
		Ok(())
	}

	fn paginate_in_memory(&self, rows: Vec<R>, page: usize) -> Model<R> {
		let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
		Model::Paginated(Paginator::from_items(rows, per_page, page).with_page_name(self.page_name.clone()))
	}
}

impl<R> std::fmt::Debug for Grid<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Grid")
			.field("columns", &self.columns)
			.field("model", &self.model)
			.field("rows", &self.rows.len())
			.field("paginate", &self.paginate)
			.field("per_page", &self.per_page)
			.field("view", &self.view)
			.field("attributes", &self.attributes)
			.finish_non_exhaustive()
	}
}
