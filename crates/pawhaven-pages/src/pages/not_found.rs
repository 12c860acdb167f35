//! Fallback for unmatched routes.

use crate::components::Link;
use crate::view::{Component, ElementView, IntoView, View};

#[derive(Debug, Clone, Default)]
pub struct NotFoundPage;

impl NotFoundPage {
	pub fn new() -> Self {
		Self
	}
}

impl Component for NotFoundPage {
	fn render(&self) -> View {
		ElementView::new("section")
			.attr("class", "not-found")
			.child(ElementView::new("h1").child("404 - Page Not Found"))
			.child(
				ElementView::new("p")
					.child("The page you're looking for doesn't exist."),
			)
			.child(Link::new("/pets", "Go to Pets").class("cta").render())
			.into_view()
	}

	fn name() -> &'static str {
		"NotFoundPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_recovery_link_points_at_pets() {
		let html = NotFoundPage::new().render().render_to_string();
		assert!(html.contains("404"));
		assert!(html.contains(r##"href="#/pets""##));
	}
}
