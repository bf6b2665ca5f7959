//! Pagination of grid rows

use tessera_core::QueryParams;
use tessera_html::escape_attr;

/// Page size used when pagination is requested without an explicit size
pub const DEFAULT_PER_PAGE: usize = 15;

// Number of pages displayed on each side of the current page
const ON_EACH_SIDE: usize = 3;

/// A page of rows together with the information needed to link other pages
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<R> {
	items: Vec<R>,
	total: usize,
	per_page: usize,
	current_page: usize,
	path: String,
	page_name: String,
	query: QueryParams,
}

impl<R> Paginator<R> {
	/// Creates a paginator from an already sliced page
	///
	/// A zero `per_page` is treated as one and a zero `current_page` as the
	/// first page.
	pub fn new(items: Vec<R>, total: usize, per_page: usize, current_page: usize) -> Self {
		Self {
			items,
			total,
			per_page: per_page.max(1),
			current_page: current_page.max(1),
			path: String::new(),
			page_name: "page".to_string(),
			query: QueryParams::new(),
		}
	}

	/// Slices page `page` out of every row
	///
	/// ```rust
	/// use tessera_tables::Paginator;
	///
	/// let paginator = Paginator::from_items((1..=7).collect::<Vec<i32>>(), 3, 3);
	/// assert_eq!(paginator.items(), &[7]);
	/// assert_eq!(paginator.total(), 7);
	/// assert_eq!(paginator.last_page(), 3);
	/// ```
	pub fn from_items(items: Vec<R>, per_page: usize, page: usize) -> Self {
		let total = items.len();
		let per_page = per_page.max(1);
		let page = page.max(1);
		let items = items
			.into_iter()
			.skip((page - 1).saturating_mul(per_page))
			.take(per_page)
			.collect();
		Self::new(items, total, per_page, page)
	}

	/// Sets the base URL of generated links
	pub fn with_path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	/// Sets the query string key carrying the page number
	pub fn with_page_name(mut self, page_name: impl Into<String>) -> Self {
		self.page_name = page_name.into();
		self
	}

	/// Adds query parameters to every generated link
	pub fn appends(&mut self, query: &QueryParams) -> &mut Self {
		for (key, value) in query.iter() {
			self.query.insert(key, value);
		}
		self
	}

	/// Rows of the current page
	pub fn items(&self) -> &[R] {
		&self.items
	}

	/// Consumes the paginator, returning the rows of the current page
	pub fn into_items(self) -> Vec<R> {
		self.items
	}

	/// Number of rows across every page
	pub fn total(&self) -> usize {
		self.total
	}

	/// Rows per page
	pub fn per_page(&self) -> usize {
		self.per_page
	}

	/// Current page (1-based)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Query string key carrying the page number
	pub fn page_name(&self) -> &str {
		&self.page_name
	}

	/// Base URL of generated links
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Number of the last page, at least one
	pub fn last_page(&self) -> usize {
		self.total.div_ceil(self.per_page).max(1)
	}

	/// Returns `true` when there is more than one page
	pub fn has_pages(&self) -> bool {
		self.last_page() > 1
	}

	/// Returns `true` when pages follow the current one
	pub fn has_more_pages(&self) -> bool {
		self.current_page < self.last_page()
	}

	/// URL of `page`, keeping the appended query parameters
	///
	/// ```rust
	/// use tessera_core::QueryParams;
	/// use tessera_tables::Paginator;
	///
	/// let mut paginator = Paginator::from_items(vec![1, 2, 3], 1, 1).with_path("/users");
	/// paginator.appends(&QueryParams::parse("q=ali").unwrap());
	/// assert_eq!(paginator.url(2), "/users?q=ali&page=2");
	/// ```
	pub fn url(&self, page: usize) -> String {
		let mut query = self.query.except(&[self.page_name.as_str()]);
		query.insert(self.page_name.as_str(), page.to_string());
		format!("{}?{}", self.path, query.to_query_string())
	}

	/// Renders Bootstrap style pagination links
	///
	/// Returns an empty string when everything fits on one page. Long page
	/// ranges collapse into a window around the current page with the first
	/// and last two pages kept.
	pub fn links(&self) -> String {
		if !self.has_pages() {
			return String::new();
		}

		let last = self.last_page();
		let current = self.current_page;
		let mut html = String::from(r#"<ul class="pagination">"#);

		if current > 1 {
			html.push_str(&self.link(current - 1, "&laquo;", Some("prev")));
		} else {
			html.push_str(&disabled("&laquo;"));
		}

		for page in self.window() {
			match page {
				Some(page) if page == current => {
					html.push_str(&format!(r#"<li class="active"><span>{}</span></li>"#, page));
				}
				Some(page) => html.push_str(&self.link(page, &page.to_string(), None)),
				None => html.push_str(&disabled("...")),
			}
		}

		if current < last {
			html.push_str(&self.link(current + 1, "&raquo;", Some("next")));
		} else {
			html.push_str(&disabled("&raquo;"));
		}

		html.push_str("</ul>");
		html
	}

	fn link(&self, page: usize, text: &str, rel: Option<&str>) -> String {
		let rel = rel.map(|rel| format!(r#" rel="{}""#, rel)).unwrap_or_default();
		format!(
			r#"<li><a href="{}"{}>{}</a></li>"#,
			escape_attr(&self.url(page)),
			rel,
			text
		)
	}

	// Pages to display, `None` standing for an ellipsis
	fn window(&self) -> Vec<Option<usize>> {
		let last = self.last_page();
		let current = self.current_page;
		let window = ON_EACH_SIDE * 2;

		if last < window + 7 {
			return (1..=last).map(Some).collect();
		}

		let mut pages: Vec<Option<usize>> = Vec::new();
		if current <= window {
			pages.extend((1..=window + 2).map(Some));
			pages.push(None);
			pages.extend([Some(last - 1), Some(last)]);
		} else if current > last - window {
			pages.extend([Some(1), Some(2), None]);
			pages.extend((last - (window + 2) + 1..=last).map(Some));
		} else {
			pages.extend([Some(1), Some(2), None]);
			pages.extend((current - ON_EACH_SIDE..=current + ON_EACH_SIDE).map(Some));
			pages.push(None);
			pages.extend([Some(last - 1), Some(last)]);
		}
		pages
	}
}

fn disabled(text: &str) -> String {
	format!(r#"<li class="disabled"><span>{}</span></li>"#, text)
}

/// Pagination toggle accepted by `Grid::paginate`
///
/// Booleans switch pagination on or off, positive integers switch it on with
/// that page size, and strings are read as either of those. Anything else
/// (zero, negative numbers, other strings) switches pagination off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerPage {
	/// Explicit on/off switch
	Toggle(bool),
	/// Page size
	Size(i64),
	/// Value read from configuration or a request
	Raw(String),
}

impl PerPage {
	/// Returns the pagination flag and page size
	///
	/// ```rust
	/// use tessera_tables::PerPage;
	///
	/// assert_eq!(PerPage::from(25).resolve(), (true, Some(25)));
	/// assert_eq!(PerPage::from("yes").resolve(), (true, None));
	/// assert_eq!(PerPage::from(0).resolve(), (false, None));
	/// ```
	pub fn resolve(&self) -> (bool, Option<usize>) {
		match self {
			Self::Toggle(enabled) => (*enabled, None),
			Self::Size(size) => size_of(*size),
			Self::Raw(raw) => {
				let raw = raw.trim();
				match raw.to_ascii_lowercase().as_str() {
					"1" | "true" | "on" | "yes" => (true, None),
					_ => raw.parse::<i64>().map(size_of).unwrap_or((false, None)),
				}
			}
		}
	}
}

fn size_of(size: i64) -> (bool, Option<usize>) {
	match usize::try_from(size) {
		Ok(size) if size >= 1 => (true, Some(size)),
		_ => (false, None),
	}
}

impl From<bool> for PerPage {
	fn from(value: bool) -> Self {
		Self::Toggle(value)
	}
}

impl From<i32> for PerPage {
	fn from(value: i32) -> Self {
		Self::Size(i64::from(value))
	}
}

impl From<i64> for PerPage {
	fn from(value: i64) -> Self {
		Self::Size(value)
	}
}

impl From<u32> for PerPage {
	fn from(value: u32) -> Self {
		Self::Size(i64::from(value))
	}
}

impl From<usize> for PerPage {
	fn from(value: usize) -> Self {
		Self::Size(i64::try_from(value).unwrap_or(i64::MAX))
	}
}

impl From<&str> for PerPage {
	fn from(value: &str) -> Self {
		Self::Raw(value.to_string())
	}
}

impl From<String> for PerPage {
	fn from(value: String) -> Self {
		Self::Raw(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(PerPage::from(true), (true, None))]
	#[case(PerPage::from(false), (false, None))]
	#[case(PerPage::from(1), (true, Some(1)))]
	#[case(PerPage::from(20), (true, Some(20)))]
	#[case(PerPage::from(0), (false, None))]
	#[case(PerPage::from(-1), (false, None))]
	#[case(PerPage::from(30usize), (true, Some(30)))]
	#[case(PerPage::from("1"), (true, None))]
	#[case(PerPage::from("On"), (true, None))]
	#[case(PerPage::from(" 5 "), (true, Some(5)))]
	#[case(PerPage::from("false"), (false, None))]
	#[case(PerPage::from(""), (false, None))]
	#[case(PerPage::from("-3"), (false, None))]
	#[case(PerPage::from("lots"), (false, None))]
	fn test_per_page_resolve(#[case] input: PerPage, #[case] expected: (bool, Option<usize>)) {
		assert_eq!(input.resolve(), expected);
	}

	#[rstest]
	#[case(1, vec![1, 2, 3])]
	#[case(2, vec![4, 5, 6])]
	#[case(4, vec![10])]
	#[case(5, vec![])]
	fn test_from_items_slices_page(#[case] page: usize, #[case] expected: Vec<i32>) {
		let paginator = Paginator::from_items((1..=10).collect::<Vec<i32>>(), 3, page);
		assert_eq!(paginator.items(), expected.as_slice());
		assert_eq!(paginator.total(), 10);
		assert_eq!(paginator.last_page(), 4);
	}

	#[rstest]
	fn test_single_page_has_no_links() {
		let paginator = Paginator::from_items(vec![1, 2], 15, 1);
		assert!(!paginator.has_pages());
		assert_eq!(paginator.links(), "");

		let empty: Paginator<i32> = Paginator::from_items(vec![], 15, 1);
		assert_eq!(empty.last_page(), 1);
	}

	#[rstest]
	fn test_links_mark_current_and_disable_edges() {
		let paginator = Paginator::from_items((1..=6).collect::<Vec<i32>>(), 2, 1);
		let links = paginator.links();

		assert!(links.starts_with(r#"<ul class="pagination"><li class="disabled"><span>&laquo;</span></li>"#));
		assert!(links.contains(r#"<li class="active"><span>1</span></li>"#));
		assert!(links.contains(r#"<li><a href="?page=3">3</a></li>"#));
		assert!(links.contains(r#"<li><a href="?page=2" rel="next">&raquo;</a></li>"#));
		assert!(links.ends_with("</ul>"));
	}

	#[rstest]
	fn test_links_keep_appended_query() {
		let mut paginator = Paginator::from_items((1..=6).collect::<Vec<i32>>(), 2, 3)
			.with_path("/admin/users")
			.with_page_name("p");
		paginator.appends(&QueryParams::parse("q=a%26b&p=9").unwrap());

		let links = paginator.links();
		assert!(links.contains(r#"href="/admin/users?q=a%26b&amp;p=2" rel="prev""#));
		assert!(links.contains(r#"<li class="disabled"><span>&raquo;</span></li>"#));
	}

	#[rstest]
	#[case(1, vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7), Some(8), None, Some(29), Some(30)])]
	#[case(15, vec![Some(1), Some(2), None, Some(12), Some(13), Some(14), Some(15), Some(16), Some(17), Some(18), None, Some(29), Some(30)])]
	#[case(28, vec![Some(1), Some(2), None, Some(23), Some(24), Some(25), Some(26), Some(27), Some(28), Some(29), Some(30)])]
	fn test_window_collapses_long_ranges(#[case] current: usize, #[case] expected: Vec<Option<usize>>) {
		let paginator: Paginator<i32> = Paginator::new(vec![], 300, 10, current);
		assert_eq!(paginator.window(), expected);
	}
}
