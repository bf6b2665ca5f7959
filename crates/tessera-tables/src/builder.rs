//! Table rendering
//!
//! [`TableBuilder`] turns a configured [`Grid`] into markup. Rendering happens
//! in two steps: [`TableBuilder::context`] resolves rows, cells and pagination
//! into a serializable [`TableContext`], then the grid's view is rendered with
//! that context. Cell content is converted to HTML before it reaches the
//! template, so templates emit it with `| safe` and everything else is
//! autoescaped.

use crate::error::Result;
use crate::grid::{Grid, SearchState, SortState};
use serde::Serialize;
use tessera_core::{Environment, QueryParams, RowAccessor};
use tessera_html::{Attributes, attributes, render_attributes};

/// Rendered attributes of the `<table>` element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableAttributes {
	/// Attribute string, each attribute with a leading space
	pub table: String,
}

/// Header of a column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnContext {
	/// Column id
	pub id: String,
	/// Header label
	pub label: String,
	/// Attribute string of the header cell
	pub header_attributes: String,
}

/// A resolved cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellContext {
	/// Column id
	pub id: String,
	/// Column label, repeated for the vertical layout
	pub label: String,
	/// Attribute string of the column header
	pub header_attributes: String,
	/// Cell content as HTML
	pub html: String,
	/// Attribute string of the cell
	pub attributes: String,
}

/// A resolved row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowContext {
	/// Attribute string of the `<tr>` element
	pub attributes: String,
	/// Cells in column order
	pub cells: Vec<CellContext>,
}

/// Grid state exposed to templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridContext {
	/// Template identifier
	pub view: String,
	/// Whether rows are paginated
	pub paginated: bool,
	/// Query string key carrying the page number
	pub page_name: String,
	/// Search configuration
	pub search: Option<SearchState>,
	/// Sort configuration
	pub sort: Option<SortState>,
}

/// Data handed to the table template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableContext {
	/// Table attributes
	pub attributes: TableAttributes,
	/// Column headers
	pub columns: Vec<ColumnContext>,
	/// Translated empty message
	pub empty: String,
	/// Grid state
	pub grid: GridContext,
	/// Pagination links, empty when not paginated
	pub pagination: String,
	/// Resolved rows
	pub rows: Vec<RowContext>,
}

/// Renders a [`Grid`] with the templates of an [`Environment`]
pub struct TableBuilder<'env, R> {
	env: &'env Environment,
	grid: Grid<R>,
}

impl<'env, R> TableBuilder<'env, R> {
	/// Wraps an already configured grid
	pub fn new(env: &'env Environment, grid: Grid<R>) -> Self {
		Self { env, grid }
	}

	/// Creates a grid from the environment's table settings and configures
	/// it with `callback`
	pub fn make<F>(env: &'env Environment, query: QueryParams, callback: F) -> Result<Self>
	where
		F: FnOnce(&mut Grid<R>) -> Result<()>,
	{
		let mut grid = Grid::new(&env.settings().table, query);
		callback(&mut grid)?;
		Ok(Self::new(env, grid))
	}

	/// Configures the grid further
	pub fn extend<F>(&mut self, callback: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut Grid<R>) -> Result<()>,
	{
		callback(&mut self.grid)?;
		Ok(self)
	}

	/// The grid being rendered
	pub fn grid(&self) -> &Grid<R> {
		&self.grid
	}

	/// Mutable access to the grid
	pub fn grid_mut(&mut self) -> &mut Grid<R> {
		&mut self.grid
	}

	/// Unwraps the grid
	pub fn into_grid(self) -> Grid<R> {
		self.grid
	}
}

impl<R: RowAccessor + Clone> TableBuilder<'_, R> {
	/// Resolves the data handed to the template
	pub fn context(&mut self) -> Result<TableContext> {
		let rows = self.grid.rows()?.to_vec();
		let grid = &self.grid;

		let columns: Vec<ColumnContext> = grid
			.columns()
			.iter()
			.map(|column| ColumnContext {
				id: column.id().to_string(),
				label: column.label().to_string(),
				header_attributes: header_attributes(column.headers()),
			})
			.collect();

		let rows: Vec<RowContext> = rows
			.iter()
			.map(|row| RowContext {
				attributes: render_attributes(&grid.attributes_of_row(row)),
				cells: grid
					.columns()
					.iter()
					.zip(&columns)
					.map(|(column, header)| CellContext {
						id: header.id.clone(),
						label: header.label.clone(),
						header_attributes: header.header_attributes.clone(),
						html: column.value(row).to_html(),
						attributes: render_attributes(&column.attributes(row)),
					})
					.collect(),
			})
			.collect();

		let pagination = match grid.model().and_then(|model| model.paginator()) {
			Some(paginator) if grid.paginated() => {
				let mut paginator = paginator.clone();
				paginator.appends(&grid.query().except(&[grid.page_name()]));
				paginator.links()
			}
			_ => String::new(),
		};

		Ok(TableContext {
			attributes: TableAttributes {
				table: render_attributes(grid.attributes()),
			},
			columns,
			empty: self.env.translator().translate(grid.empty()),
			grid: GridContext {
				view: grid.view().to_string(),
				paginated: grid.paginated(),
				page_name: grid.page_name().to_string(),
				search: grid.search_state().cloned(),
				sort: grid.sort_state().cloned(),
			},
			pagination,
			rows,
		})
	}

	/// Renders the grid with its view
	pub fn render(&mut self) -> Result<String> {
		let context = self.context()?;
		tracing::debug!(
			view = %context.grid.view,
			rows = context.rows.len(),
			paginated = context.grid.paginated,
			"rendering table"
		);
		Ok(self
			.env
			.templates()
			.render_serialize(&context.grid.view, &context)?)
	}
}

fn header_attributes(headers: &[String]) -> String {
	if headers.is_empty() {
		return String::new();
	}
	let header: Attributes = attributes([("class", headers.join(" "))]);
	render_attributes(&header)
}

impl<R> std::fmt::Debug for TableBuilder<'_, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableBuilder")
			.field("grid", &self.grid)
			.finish_non_exhaustive()
	}
}
