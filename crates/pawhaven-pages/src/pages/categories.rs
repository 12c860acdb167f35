//! The categories list screen.

use super::apply_route_paging;
use crate::components::{pagination_controls, table};
use crate::format::format_date;
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;
use pawhaven_types::Category;

pub struct CategoriesPage {
	pager: Paginator<Category>,
}

impl CategoriesPage {
	pub async fn load(services: &Services, route: &Fragment) -> Result<Self, ApiError> {
		Ok(Self::from_categories(services.categories.all().await?, route))
	}

	pub fn from_categories(categories: Vec<Category>, route: &Fragment) -> Self {
		let mut pager = Paginator::new(categories);
		apply_route_paging(&mut pager, route);
		Self { pager }
	}

	pub fn pager(&self) -> &Paginator<Category> {
		&self.pager
	}
}

impl Component for CategoriesPage {
	fn render(&self) -> View {
		let rows = self
			.pager
			.current_items()
			.iter()
			.map(|category| {
				vec![
					View::text(category.name.clone()),
					View::text(format_date(&category.created_at)),
				]
			})
			.collect();

		ElementView::new("section")
			.attr("class", "categories-page")
			.child(ElementView::new("h1").child("Categories"))
			.child(table(&["Name", "Created"], rows))
			.child(pagination_controls(&self.pager.view()))
			.into_view()
	}

	fn name() -> &'static str {
		"CategoriesPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	#[test]
	fn test_page_size_from_route_resets_to_first_page() {
		let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
		let categories: Vec<Category> = (0..30)
			.map(|i| Category {
				id: i,
				name: format!("cat-{i}"),
				created_at: at,
			})
			.collect();

		let page =
			CategoriesPage::from_categories(categories, &Fragment::parse("/categories?size=5"));
		assert_eq!(page.pager().page_size(), 5);
		assert_eq!(page.pager().current_page(), 1);
		assert_eq!(page.pager().total_pages(), 6);
	}
}
