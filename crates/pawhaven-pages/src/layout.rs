//! The application shell around authenticated screens.

use crate::components::{Link, badge};
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_auth::session::Session;
use pawhaven_types::Role;

struct NavItem {
	label: &'static str,
	href: &'static str,
	roles: &'static [Role],
}

/// Section links shown in the header, each gated to the roles that can
/// actually open the target route.
const NAV_ITEMS: [NavItem; 7] = [
	NavItem {
		label: "Dashboard",
		href: "/dashboard",
		roles: &[Role::Admin],
	},
	NavItem {
		label: "Pets",
		href: "/pets",
		roles: &[Role::User, Role::Admin, Role::Shelter, Role::Veterinarian],
	},
	NavItem {
		label: "Categories",
		href: "/categories",
		roles: &[Role::Admin],
	},
	NavItem {
		label: "Breeds",
		href: "/breeds",
		roles: &[Role::Admin],
	},
	NavItem {
		label: "Adoptions",
		href: "/adoptions",
		roles: &[Role::User, Role::Admin, Role::Shelter],
	},
	NavItem {
		label: "Shelters",
		href: "/shelters",
		roles: &[Role::Admin, Role::Shelter],
	},
	NavItem {
		label: "Veterinarians",
		href: "/veterinarians",
		roles: &[Role::Admin, Role::Veterinarian],
	},
];

/// Wraps page content in the header/nav shell.
///
/// Navigation entries the session's role cannot open are not rendered;
/// the router would redirect them anyway, so hiding them is purely a
/// courtesy.
pub fn layout(session: Option<&Session>, content: View) -> View {
	let nav_links: Vec<View> = NAV_ITEMS
		.iter()
		.filter(|item| match session {
			Some(session) => item.roles.contains(&session.role),
			None => false,
		})
		.map(|item| {
			ElementView::new("li")
				.child(Link::new(item.href, item.label).class("nav-link").render())
				.into_view()
		})
		.collect();

	let account = match session {
		Some(session) => ElementView::new("div")
			.attr("class", "account")
			.child(
				ElementView::new("span")
					.attr("class", "account-name")
					.child(session.username.clone()),
			)
			.child(badge(session.role.as_str()))
			.child(
				ElementView::new("button")
					.attr("type", "button")
					.attr("class", "sign-out")
					.attr("data-action", "sign-out")
					.child("Sign out"),
			)
			.into_view(),
		None => ElementView::new("div")
			.attr("class", "account")
			.child(Link::new("/login", "Sign in").render())
			.child(Link::new("/register", "Sign up").render())
			.into_view(),
	};

	let header = ElementView::new("header")
		.attr("class", "app-header")
		.child(Link::new("/", "Pawhaven Admin").class("brand").render())
		.child(
			ElementView::new("nav")
				.attr("class", "app-nav")
				.child(ElementView::new("ul").children(nav_links)),
		)
		.child(account);

	ElementView::new("div")
		.attr("class", "app")
		.child(header)
		.child(ElementView::new("main").attr("class", "app-main").child(content))
		.into_view()
}
