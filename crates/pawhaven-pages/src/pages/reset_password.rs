//! The password-reset completion screen.

use super::login::labeled_input;
use crate::view::{Component, ElementView, IntoView, View};

/// Sets a new password against an emailed reset token.
///
/// The router guarantees this page is never resolved without a token;
/// the token rides along in a hidden field so the submit handler can
/// post it with the new password.
#[derive(Debug, Clone)]
pub struct ResetPasswordPage {
	token: String,
}

impl ResetPasswordPage {
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
		}
	}

	pub fn token(&self) -> &str {
		&self.token
	}
}

impl Component for ResetPasswordPage {
	fn render(&self) -> View {
		ElementView::new("section")
			.attr("class", "auth-card")
			.child(ElementView::new("h1").child("Choose a new password"))
			.child(
				ElementView::new("form")
					.attr("data-form", "reset-password")
					.child(
						ElementView::new("input")
							.attr("type", "hidden")
							.attr("name", "token")
							.attr("value", self.token.clone()),
					)
					.child(labeled_input("New password", "password", "password"))
					.child(labeled_input(
						"Confirm password",
						"confirmPassword",
						"password",
					))
					.child(
						ElementView::new("button")
							.attr("type", "submit")
							.child("Reset password"),
					),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"ResetPasswordPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_token_is_carried_in_hidden_field() {
		let html = ResetPasswordPage::new("tok-9").render().render_to_string();
		assert!(html.contains(r#"name="token""#));
		assert!(html.contains(r#"value="tok-9""#));
		assert!(html.contains(r#"name="confirmPassword""#));
	}
}
