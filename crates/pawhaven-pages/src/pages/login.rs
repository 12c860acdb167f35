//! The sign-in screen.

use crate::components::Link;
use crate::view::{Component, ElementView, IntoView, View};

/// Username/password form; submission is wired by the shell, which
/// calls the auth service and establishes the session on success.
#[derive(Debug, Clone, Default)]
pub struct LoginPage;

impl LoginPage {
	pub fn new() -> Self {
		Self
	}
}

impl Component for LoginPage {
	fn render(&self) -> View {
		ElementView::new("section")
			.attr("class", "auth-card")
			.child(ElementView::new("h1").child("Sign in"))
			.child(
				ElementView::new("form")
					.attr("data-form", "login")
					.child(labeled_input("Username", "username", "text"))
					.child(labeled_input("Password", "password", "password"))
					.child(
						ElementView::new("button")
							.attr("type", "submit")
							.child("Sign in"),
					),
			)
			.child(
				ElementView::new("p")
					.attr("class", "auth-links")
					.child(Link::new("/forgot-password", "Forgot your password?").render())
					.child(Link::new("/register", "Create an account").render()),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"LoginPage"
	}
}

pub(crate) fn labeled_input(label: &str, name: &str, kind: &str) -> View {
	ElementView::new("label")
		.child(label)
		.child(
			ElementView::new("input")
				.attr("type", kind)
				.attr("name", name),
		)
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_login_form_fields() {
		let html = LoginPage::new().render().render_to_string();
		assert!(html.contains(r#"name="username""#));
		assert!(html.contains(r#"type="password""#));
		assert!(html.contains(r##"href="#/forgot-password""##));
	}
}
