//! Row sources attached to a grid

use crate::error::Result;
use crate::memory::MemoryQuery;
use crate::pagination::Paginator;
use std::fmt;
use tessera_core::RowAccessor;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl SortDirection {
	/// Parses a `direction` query parameter
	///
	/// Only `desc` (in any case) selects descending order.
	///
	/// ```rust
	/// use tessera_tables::SortDirection;
	///
	/// assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Desc);
	/// assert_eq!(SortDirection::parse(Some("down")), SortDirection::Asc);
	/// assert_eq!(SortDirection::parse(None), SortDirection::Asc);
	/// ```
	pub fn parse(value: Option<&str>) -> Self {
		match value {
			Some(value) if value.trim().eq_ignore_ascii_case("desc") => Self::Desc,
			_ => Self::Asc,
		}
	}

	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}

	/// Query string form of the direction
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}
}

/// Keyword search over a set of fields
///
/// A row matches when any of the fields contains the keyword, compared
/// case-insensitively. `*` in the keyword matches any run of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
	keyword: String,
	fields: Vec<String>,
	segments: Vec<String>,
}

impl SearchFilter {
	/// Creates a filter for `keyword` over `fields`
	pub fn new(keyword: impl Into<String>, fields: Vec<String>) -> Self {
		let keyword = keyword.into();
		let segments = keyword
			.to_lowercase()
			.split('*')
			.filter(|segment| !segment.is_empty())
			.map(String::from)
			.collect();
		Self {
			keyword,
			fields,
			segments,
		}
	}

	/// Keyword as typed by the user
	pub fn keyword(&self) -> &str {
		&self.keyword
	}

	/// Fields searched by this filter
	pub fn fields(&self) -> &[String] {
		&self.fields
	}

	/// Returns `true` when `text` matches the keyword
	///
	/// ```rust
	/// use tessera_tables::SearchFilter;
	///
	/// let filter = SearchFilter::new("Al*ce", vec!["name".into()]);
	/// assert!(filter.matches("alice"));
	/// assert!(filter.matches("Malice"));
	/// assert!(!filter.matches("Bob"));
	/// ```
	pub fn matches(&self, text: &str) -> bool {
		let haystack = text.to_lowercase();
		let mut position = 0;
		for segment in &self.segments {
			match haystack[position..].find(segment.as_str()) {
				Some(index) => position += index + segment.len(),
				None => return false,
			}
		}
		true
	}

	/// Returns `true` when any searched field of `row` matches
	pub fn matches_row<R: RowAccessor>(&self, row: &R) -> bool {
		self.fields.iter().any(|field| {
			row.get_field(field)
				.is_some_and(|value| self.matches(&tessera_core::value_to_string(&value)))
		})
	}
}

/// Lazy source of rows that can be searched, ordered and paginated
///
/// Filtering methods consume the boxed builder and return a new one, so a
/// grid can rewrite the query it holds without knowing its concrete type.
/// Implementations backed by a database are expected to validate `column`
/// in [`order_by`](QueryBuilder::order_by) against their own schema.
pub trait QueryBuilder<R> {
	/// Restricts the rows to those matching `filter`
	fn search(self: Box<Self>, filter: SearchFilter) -> Box<dyn QueryBuilder<R>>;

	/// Orders the rows by `column`
	fn order_by(self: Box<Self>, column: &str, direction: SortDirection) -> Box<dyn QueryBuilder<R>>;

	/// Fetches every matching row
	fn get(&self) -> Result<Vec<R>>;

	/// Fetches page `page` (1-based) of the matching rows
	///
	/// `per_page` is `None` when the grid leaves the page size to the builder.
	fn paginate(&self, per_page: Option<usize>, page: usize) -> Result<Paginator<R>>;
}

/// Collection that can be converted into rows
pub trait Arrayable<R> {
	/// Returns the rows of the collection
	fn to_rows(&self) -> Vec<R>;
}

impl<R: Clone> Arrayable<R> for Vec<R> {
	fn to_rows(&self) -> Vec<R> {
		self.clone()
	}
}

impl<R: Clone> Arrayable<R> for std::collections::VecDeque<R> {
	fn to_rows(&self) -> Vec<R> {
		self.iter().cloned().collect()
	}
}

/// Row source of a grid
pub enum Model<R> {
	/// Query resolved on first row read
	Query(Box<dyn QueryBuilder<R>>),
	/// A page of already fetched rows
	Paginated(Paginator<R>),
	/// Collection converted on first row read
	Collection(Box<dyn Arrayable<R>>),
	/// Literal rows
	Rows(Vec<R>),
}

impl<R> Model<R> {
	/// Wraps a query builder
	pub fn query(query: impl QueryBuilder<R> + 'static) -> Self {
		Self::Query(Box::new(query))
	}

	/// Wraps a collection
	pub fn collection(collection: impl Arrayable<R> + 'static) -> Self {
		Self::Collection(Box::new(collection))
	}

	/// Short name of the source, used in logs and errors
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Query(_) => "query",
			Self::Paginated(_) => "paginator",
			Self::Collection(_) => "collection",
			Self::Rows(_) => "rows",
		}
	}

	/// Returns the paginator when the source is a page of results
	pub fn paginator(&self) -> Option<&Paginator<R>> {
		match self {
			Self::Paginated(paginator) => Some(paginator),
			_ => None,
		}
	}
}

impl<R> fmt::Debug for Model<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Paginated(paginator) => f
				.debug_struct("Paginated")
				.field("total", &paginator.total())
				.field("per_page", &paginator.per_page())
				.field("current_page", &paginator.current_page())
				.finish_non_exhaustive(),
			Self::Rows(rows) => f.debug_struct("Rows").field("len", &rows.len()).finish(),
			other => f.write_str(other.kind()),
		}
	}
}

impl<R> From<Vec<R>> for Model<R> {
	fn from(rows: Vec<R>) -> Self {
		Self::Rows(rows)
	}
}

impl<R> From<Paginator<R>> for Model<R> {
	fn from(paginator: Paginator<R>) -> Self {
		Self::Paginated(paginator)
	}
}

impl<R: RowAccessor + Clone + 'static> From<MemoryQuery<R>> for Model<R> {
	fn from(query: MemoryQuery<R>) -> Self {
		Self::query(query)
	}
}
