//! In-memory query builder

use crate::error::Result;
use crate::model::{QueryBuilder, SearchFilter, SortDirection};
use crate::pagination::{DEFAULT_PER_PAGE, Paginator};
use serde_json::Value;
use std::cmp::Ordering;
use tessera_core::{RowAccessor, value_to_string};

/// [`QueryBuilder`] over rows held in memory
///
/// Searches are applied in order and all of them must match; sorting is
/// stable and compares numbers numerically, everything else as text.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tessera_tables::{MemoryQuery, QueryBuilder, SearchFilter, SortDirection};
///
/// let query = Box::new(MemoryQuery::new(vec![
///     json!({"name": "Carol", "age": 41}),
///     json!({"name": "alice", "age": 30}),
///     json!({"name": "Bob", "age": 25}),
/// ]));
///
/// let rows = query
///     .search(SearchFilter::new("o", vec!["name".into()]))
///     .order_by("age", SortDirection::Asc)
///     .get()
///     .unwrap();
///
/// assert_eq!(rows, vec![json!({"name": "Bob", "age": 25}), json!({"name": "Carol", "age": 41})]);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryQuery<R> {
	rows: Vec<R>,
	filters: Vec<SearchFilter>,
	order: Option<(String, SortDirection)>,
	per_page: usize,
}

impl<R> MemoryQuery<R> {
	/// Creates a query over `rows`
	pub fn new(rows: Vec<R>) -> Self {
		Self {
			rows,
			filters: Vec::new(),
			order: None,
			per_page: DEFAULT_PER_PAGE,
		}
	}

	/// Sets the page size used when the grid does not choose one
	pub fn with_per_page(mut self, per_page: usize) -> Self {
		self.per_page = per_page.max(1);
		self
	}

	/// Search filters applied so far
	pub fn filters(&self) -> &[SearchFilter] {
		&self.filters
	}

	/// Requested ordering
	pub fn order(&self) -> Option<(&str, SortDirection)> {
		self.order
			.as_ref()
			.map(|(column, direction)| (column.as_str(), *direction))
	}
}

impl<R: RowAccessor + Clone + 'static> QueryBuilder<R> for MemoryQuery<R> {
	fn search(mut self: Box<Self>, filter: SearchFilter) -> Box<dyn QueryBuilder<R>> {
		self.filters.push(filter);
		self
	}

	fn order_by(mut self: Box<Self>, column: &str, direction: SortDirection) -> Box<dyn QueryBuilder<R>> {
		self.order = Some((column.to_string(), direction));
		self
	}

	fn get(&self) -> Result<Vec<R>> {
		let mut rows: Vec<R> = self
			.rows
			.iter()
			.filter(|row| self.filters.iter().all(|filter| filter.matches_row(*row)))
			.cloned()
			.collect();

		if let Some((column, direction)) = &self.order {
			rows.sort_by(|a, b| {
				let ordering = compare(a.get_field(column).as_ref(), b.get_field(column).as_ref());
				match direction {
					SortDirection::Asc => ordering,
					SortDirection::Desc => ordering.reverse(),
				}
			});
		}

		Ok(rows)
	}

	fn paginate(&self, per_page: Option<usize>, page: usize) -> Result<Paginator<R>> {
		let rows = self.get()?;
		Ok(Paginator::from_items(rows, per_page.unwrap_or(self.per_page), page))
	}
}

// Missing values sort first
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(Value::Number(a)), Some(Value::Number(b))) => {
			let a = a.as_f64().unwrap_or_default();
			let b = b.as_f64().unwrap_or_default();
			a.partial_cmp(&b).unwrap_or(Ordering::Equal)
		}
		(Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
		(Some(a), Some(b)) => value_to_string(a).cmp(&value_to_string(b)),
	}
}
