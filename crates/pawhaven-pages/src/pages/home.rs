//! The public landing screen.

use crate::components::Link;
use crate::view::{Component, ElementView, IntoView, View};

/// Landing page; its calls to action depend on whether a session
/// exists.
#[derive(Debug, Clone)]
pub struct HomePage {
	authenticated: bool,
}

impl HomePage {
	pub fn new(authenticated: bool) -> Self {
		Self { authenticated }
	}
}

impl Component for HomePage {
	fn render(&self) -> View {
		let actions = if self.authenticated {
			vec![Link::new("/pets", "Browse pets").class("cta").render()]
		} else {
			vec![
				Link::new("/login", "Sign in").class("cta").render(),
				Link::new("/register", "Create an account").class("cta-secondary").render(),
			]
		};

		ElementView::new("section")
			.attr("class", "home")
			.child(ElementView::new("h1").child("Pawhaven"))
			.child(
				ElementView::new("p")
					.child("Find shelter pets a home. Manage listings, adoption requests and care."),
			)
			.child(ElementView::new("div").attr("class", "home-actions").children(actions))
			.into_view()
	}

	fn name() -> &'static str {
		"HomePage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_signed_out_home_offers_sign_in() {
		let html = HomePage::new(false).render().render_to_string();
		assert!(html.contains(r##"href="#/login""##));
		assert!(html.contains(r##"href="#/register""##));
	}

	#[test]
	fn test_signed_in_home_links_to_pets() {
		let html = HomePage::new(true).render().render_to_string();
		assert!(html.contains(r##"href="#/pets""##));
		assert!(!html.contains(r##"href="#/register""##));
	}
}
