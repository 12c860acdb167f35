//! Shared building blocks used across the screens.

use crate::view::{ElementView, IntoView, View};
use pawhaven_pagination::{DEFAULT_WINDOW_SIZE, PAGE_SIZE_OPTIONS, PagedView, page_window};

/// An in-app link.
///
/// Renders as an anchor whose `href` is the fragment form of the
/// target path, so clicking it assigns a new fragment and the browser
/// raises the hashchange the router listens for. No click interception
/// involved.
#[derive(Debug, Clone)]
pub struct Link {
	to: String,
	content: String,
	class: Option<String>,
}

impl Link {
	/// Creates a link to an application path, e.g. `/pets`.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			class: None,
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// The target path.
	pub fn to(&self) -> &str {
		&self.to
	}
}

impl crate::view::Component for Link {
	fn render(&self) -> View {
		let mut el = ElementView::new("a").attr("href", format!("#{}", self.to));
		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}
		el.child(self.content.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

/// A plain data table with a header row.
pub fn table(headers: &[&str], rows: Vec<Vec<View>>) -> View {
	let head = ElementView::new("thead").child(
		ElementView::new("tr").children(
			headers
				.iter()
				.map(|h| ElementView::new("th").child(*h).into_view())
				.collect(),
		),
	);
	let body = ElementView::new("tbody").children(
		rows.into_iter()
			.map(|cells| {
				ElementView::new("tr")
					.children(
						cells
							.into_iter()
							.map(|cell| ElementView::new("td").child(cell).into_view())
							.collect(),
					)
					.into_view()
			})
			.collect(),
	);
	ElementView::new("table")
		.attr("class", "data-table")
		.child(head)
		.child(body)
		.into_view()
}

/// A status or role badge, classed by its lower-cased value.
pub fn badge(value: &str) -> View {
	ElementView::new("span")
		.attr("class", format!("badge badge-{}", value.to_lowercase()))
		.child(value)
		.into_view()
}

/// The pagination bar under every list table.
///
/// Emits the item-range summary, the page-size selector and the page
/// controls computed by [`page_window`]. Buttons carry their target
/// page in `data-page`; the shell reads it back on click and calls
/// `set_page`, which clamps, so stale markup can never move the pager
/// out of range.
pub fn pagination_controls<T>(paged: &PagedView<'_, T>) -> View {
	let current = paged.current_page();
	let total = paged.total_pages();
	let window = page_window(current, total, DEFAULT_WINDOW_SIZE);

	let summary = ElementView::new("div")
		.attr("class", "pagination-summary")
		.child(format!(
			"Showing {} to {} of {} results",
			paged.start_index(),
			paged.end_index(),
			paged.total_items()
		));

	let mut size_select = ElementView::new("select")
		.attr("class", "pagination-page-size")
		.attr("data-role", "page-size");
	for option in PAGE_SIZE_OPTIONS {
		let mut el = ElementView::new("option").attr("value", option.to_string());
		if option == paged.page_size() {
			el = el.attr("selected", "");
		}
		size_select = size_select.child(el.child(option.to_string()));
	}

	let mut controls: Vec<View> = Vec::new();
	controls.push(page_button("First", 1, current == 1, false));
	controls.push(page_button(
		"Previous",
		current.saturating_sub(1).max(1),
		current == 1,
		false,
	));

	if window.show_first {
		controls.push(page_button("1", 1, false, false));
		if window.leading_ellipsis {
			controls.push(ellipsis());
		}
	}
	for page in &window.pages {
		controls.push(page_button(&page.to_string(), *page, false, *page == current));
	}
	if window.show_last {
		if window.trailing_ellipsis {
			controls.push(ellipsis());
		}
		controls.push(page_button(&total.to_string(), total, false, false));
	}

	controls.push(page_button(
		"Next",
		(current + 1).min(total),
		current == total,
		false,
	));
	controls.push(page_button("Last", total, current == total, false));

	ElementView::new("div")
		.attr("class", "pagination")
		.child(summary)
		.child(size_select)
		.child(
			ElementView::new("nav")
				.attr("class", "pagination-controls")
				.children(controls),
		)
		.into_view()
}

fn page_button(label: &str, page: usize, disabled: bool, active: bool) -> View {
	let mut el = ElementView::new("button")
		.attr("type", "button")
		.attr("data-page", page.to_string())
		.attr("class", if active { "page-btn active" } else { "page-btn" });
	if disabled {
		el = el.attr("disabled", "");
	}
	el.child(label).into_view()
}

fn ellipsis() -> View {
	ElementView::new("span")
		.attr("class", "pagination-ellipsis")
		.child("...")
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::Component;
	use pawhaven_pagination::Paginator;

	#[test]
	fn test_link_renders_fragment_href() {
		let html = Link::new("/pets", "Pets").class("nav-link").render().render_to_string();
		assert!(html.contains(r##"href="#/pets""##));
		assert!(html.contains(r#"class="nav-link""#));
		assert!(html.contains(">Pets</a>"));
	}

	#[test]
	fn test_table_renders_headers_and_cells() {
		let html = table(
			&["Name", "Age"],
			vec![vec![View::text("Biscuit"), View::text("3")]],
		)
		.render_to_string();
		assert!(html.contains("<th>Name</th>"));
		assert!(html.contains("<td>Biscuit</td>"));
	}

	#[test]
	fn test_pagination_controls_mark_current_page() {
		let mut pager = Paginator::new((0..100).collect::<Vec<_>>());
		pager.set_page(7);
		let html = pagination_controls(&pager.view()).render_to_string();

		assert!(html.contains("Showing 61 to 70 of 100 results"));
		assert!(html.contains(r#"data-page="7" class="page-btn active""#));
		// Window is 5..=9, so both endpoint shortcuts appear.
		assert!(html.contains(r#"data-page="10""#));
		assert!(html.contains("..."));
	}

	#[test]
	fn test_pagination_controls_disable_edges_on_single_page() {
		let pager: Paginator<i32> = Paginator::new(vec![]);
		let html = pagination_controls(&pager.view()).render_to_string();
		assert!(html.contains("Showing 0 to 0 of 0 results"));
		// First/Previous/Next/Last all disabled on the only page.
		assert_eq!(html.matches("disabled").count(), 4);
	}
}
