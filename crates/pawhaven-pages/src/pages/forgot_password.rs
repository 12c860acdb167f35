//! The password-reset request screen.

use super::login::labeled_input;
use crate::components::Link;
use crate::view::{Component, ElementView, IntoView, View};

/// Asks for an email address; the API mails a reset link carrying the
/// token that the reset screen requires.
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordPage;

impl ForgotPasswordPage {
	pub fn new() -> Self {
		Self
	}
}

impl Component for ForgotPasswordPage {
	fn render(&self) -> View {
		ElementView::new("section")
			.attr("class", "auth-card")
			.child(ElementView::new("h1").child("Reset your password"))
			.child(
				ElementView::new("p")
					.child("Enter your email and we'll send you a reset link."),
			)
			.child(
				ElementView::new("form")
					.attr("data-form", "forgot-password")
					.child(labeled_input("Email", "email", "email"))
					.child(
						ElementView::new("button")
							.attr("type", "submit")
							.child("Send reset link"),
					),
			)
			.child(
				ElementView::new("p")
					.attr("class", "auth-links")
					.child(Link::new("/login", "Back to sign in").render()),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"ForgotPasswordPage"
	}
}
