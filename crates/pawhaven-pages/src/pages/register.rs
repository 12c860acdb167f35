//! The account-registration screen.

use super::login::labeled_input;
use crate::components::Link;
use crate::view::{Component, ElementView, IntoView, View};

#[derive(Debug, Clone, Default)]
pub struct RegisterPage;

impl RegisterPage {
	pub fn new() -> Self {
		Self
	}
}

impl Component for RegisterPage {
	fn render(&self) -> View {
		ElementView::new("section")
			.attr("class", "auth-card")
			.child(ElementView::new("h1").child("Create an account"))
			.child(
				ElementView::new("form")
					.attr("data-form", "register")
					.child(labeled_input("Username", "username", "text"))
					.child(labeled_input("Email", "email", "email"))
					.child(labeled_input("Full name", "fullName", "text"))
					.child(labeled_input("Password", "password", "password"))
					.child(
						ElementView::new("button")
							.attr("type", "submit")
							.child("Sign up"),
					),
			)
			.child(
				ElementView::new("p")
					.attr("class", "auth-links")
					.child(Link::new("/login", "Already have an account? Sign in").render()),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"RegisterPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_register_form_fields() {
		let html = RegisterPage::new().render().render_to_string();
		assert!(html.contains(r#"name="fullName""#));
		assert!(html.contains(r#"name="email""#));
		assert!(html.contains(r##"href="#/login""##));
	}
}
