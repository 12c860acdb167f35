//! Client-side list pagination.
//!
//! The admin screens fetch whole collections from the API and page
//! through them in memory. [`Paginator`] owns the collection and the
//! page state; [`PagedView`] is the derived, read-only view of one
//! page; [`page_window`] computes which page-number controls to render.
//!
//! No operation here fails: out-of-range requests are clamped and a
//! replaced collection snaps back to the first page. Screens can feed
//! these types arbitrary input from the location bar without guarding.
//!
//! ## Example
//!
//! ```
//! use pawhaven_pagination::Paginator;
//!
//! let mut pager = Paginator::new((1..=23).collect::<Vec<_>>());
//! assert_eq!(pager.total_pages(), 3);
//!
//! pager.set_page(5); // clamped, never an error
//! assert_eq!(pager.current_page(), 3);
//! assert_eq!(pager.current_items().len(), 3);
//! ```

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default width of the page-number window rendered by list screens.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Page sizes offered by the per-page selector on list screens.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Owns a collection and the page state used to slice it.
///
/// The page number is 1-indexed and always valid: every mutation clamps
/// it into `[1, total_pages]`, and `total_pages` is at least 1 even for
/// an empty collection, so there is no zero-page state.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
	items: Vec<T>,
	page_size: usize,
	current_page: usize,
}

impl<T> Paginator<T> {
	/// Creates a paginator over `items` with the default page size,
	/// positioned on the first page.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_pagination::{Paginator, DEFAULT_PAGE_SIZE};
	///
	/// let pager = Paginator::new(vec!["a", "b", "c"]);
	/// assert_eq!(pager.current_page(), 1);
	/// assert_eq!(pager.page_size(), DEFAULT_PAGE_SIZE);
	/// ```
	pub fn new(items: Vec<T>) -> Self {
		Self {
			items,
			page_size: DEFAULT_PAGE_SIZE,
			current_page: 1,
		}
	}

	/// Sets the page size at construction time. A size of zero is
	/// treated as 1.
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size.max(1);
		self.current_page = 1;
		self
	}

	/// Sets the starting page at construction time, clamped into range.
	pub fn with_initial_page(mut self, page: usize) -> Self {
		self.current_page = self.clamp_page(page);
		self
	}

	/// Replaces the collection.
	///
	/// The current page resets to 1 unconditionally, even when the old
	/// page number would still be valid for the new collection: page
	/// state never survives a data refresh.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_pagination::Paginator;
	///
	/// let mut pager = Paginator::new((0..50).collect::<Vec<_>>());
	/// pager.set_page(4);
	/// pager.set_items((0..50).collect());
	/// assert_eq!(pager.current_page(), 1);
	/// ```
	pub fn set_items(&mut self, items: Vec<T>) {
		self.items = items;
		self.current_page = 1;
	}

	/// Moves to `page`, clamped into `[1, total_pages]`.
	///
	/// Out-of-range requests are satisfied with the nearest valid page
	/// rather than rejected.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_pagination::Paginator;
	///
	/// let mut pager = Paginator::new((0..25).collect::<Vec<_>>());
	/// pager.set_page(0);
	/// assert_eq!(pager.current_page(), 1);
	/// pager.set_page(99);
	/// assert_eq!(pager.current_page(), 3);
	/// ```
	pub fn set_page(&mut self, page: usize) {
		self.current_page = self.clamp_page(page);
	}

	/// Changes the page size and resets to the first page.
	///
	/// Resetting (rather than clamping the old page into the new
	/// bounds) keeps one contract across every list screen. A size of
	/// zero is treated as 1.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_pagination::Paginator;
	///
	/// let mut pager = Paginator::new((0..100).collect::<Vec<_>>());
	/// pager.set_page(7);
	/// pager.set_page_size(25);
	/// assert_eq!(pager.current_page(), 1);
	/// assert_eq!(pager.total_pages(), 4);
	/// ```
	pub fn set_page_size(&mut self, page_size: usize) {
		self.page_size = page_size.max(1);
		self.current_page = 1;
	}

	/// The current 1-indexed page number.
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Items per page.
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Total number of items across all pages.
	pub fn total_items(&self) -> usize {
		self.items.len()
	}

	/// Total number of pages; at least 1 even when the collection is
	/// empty.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_pagination::Paginator;
	///
	/// let empty: Paginator<i32> = Paginator::new(vec![]);
	/// assert_eq!(empty.total_pages(), 1);
	/// ```
	pub fn total_pages(&self) -> usize {
		self.items.len().div_ceil(self.page_size).max(1)
	}

	/// The slice of items on the current page.
	pub fn current_items(&self) -> &[T] {
		let start = (self.current_page - 1) * self.page_size;
		let end = (start + self.page_size).min(self.items.len());
		// start can only exceed len if the collection shrank through
		// set_items, which resets the page; guard anyway.
		if start >= self.items.len() {
			&[]
		} else {
			&self.items[start..end]
		}
	}

	/// The full collection, in insertion order.
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Derives the read-only view of the current page.
	pub fn view(&self) -> PagedView<'_, T> {
		PagedView {
			items: self.current_items(),
			current_page: self.current_page,
			page_size: self.page_size,
			total_items: self.total_items(),
			total_pages: self.total_pages(),
		}
	}

	fn clamp_page(&self, page: usize) -> usize {
		page.clamp(1, self.total_pages())
	}
}

/// One page of a collection, derived from a [`Paginator`].
///
/// Pure data: recomputed from the paginator on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedView<'a, T> {
	items: &'a [T],
	current_page: usize,
	page_size: usize,
	total_items: usize,
	total_pages: usize,
}

impl<'a, T> PagedView<'a, T> {
	/// Items on this page.
	pub fn items(&self) -> &'a [T] {
		self.items
	}

	/// The 1-indexed page number.
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Items per page.
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Total items across all pages.
	pub fn total_items(&self) -> usize {
		self.total_items
	}

	/// Total pages; at least 1.
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// 1-based index of the first item on this page, 0 when empty.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_pagination::Paginator;
	///
	/// let mut pager = Paginator::new((0..30).collect::<Vec<_>>());
	/// pager.set_page(2);
	/// assert_eq!(pager.view().start_index(), 11);
	/// assert_eq!(pager.view().end_index(), 20);
	/// ```
	pub fn start_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			(self.current_page - 1) * self.page_size + 1
		}
	}

	/// 1-based index of the last item on this page, 0 when empty.
	pub fn end_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.start_index() + self.items.len() - 1
		}
	}

	/// True when a later page exists.
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	/// True when an earlier page exists.
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}
}

/// The page-number controls a list screen should render.
///
/// Produced by [`page_window`]. `pages` is the contiguous window of
/// page numbers; the shortcut/ellipsis flags describe the "1 …" and
/// "… N" endpoint controls on either side of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
	/// Contiguous page numbers to render, in ascending order.
	pub pages: Vec<usize>,
	/// Render a shortcut to page 1 before the window.
	pub show_first: bool,
	/// Render an ellipsis between the first-page shortcut and the window.
	pub leading_ellipsis: bool,
	/// Render a shortcut to the last page after the window.
	pub show_last: bool,
	/// Render an ellipsis between the window and the last-page shortcut.
	pub trailing_ellipsis: bool,
}

/// Computes the window of page numbers to render as controls.
///
/// Pure function of its inputs. The window is centered on
/// `current_page`, shifted to stay full near either end, and never
/// wider than `window_size` nor outside `[1, total_pages]`. Degenerate
/// inputs are normalized instead of rejected: a zero `total_pages` or
/// `window_size` counts as 1, and `current_page` is clamped into range.
///
/// # Examples
///
/// ```
/// use pawhaven_pagination::page_window;
///
/// let w = page_window(7, 10, 5);
/// assert_eq!(w.pages, vec![5, 6, 7, 8, 9]);
/// assert!(w.show_first && w.leading_ellipsis);
/// assert!(w.show_last && !w.trailing_ellipsis);
/// ```
pub fn page_window(current_page: usize, total_pages: usize, window_size: usize) -> PageWindow {
	let total = total_pages.max(1);
	let width = window_size.max(1);
	let current = current_page.clamp(1, total);

	let mut start = current.saturating_sub(width / 2).max(1);
	let end = total.min(start + width - 1);
	if end - start + 1 < width {
		// Near the last page: slide the window left to keep it full.
		start = (end + 1).saturating_sub(width).max(1);
	}

	PageWindow {
		pages: (start..=end).collect(),
		show_first: start > 1,
		leading_ellipsis: start > 2,
		show_last: end < total,
		trailing_ellipsis: end + 1 < total,
	}
}
