//! The static route table.

use pawhaven_types::Role;

/// Identifies a page component to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
	Home,
	Login,
	Register,
	ForgotPassword,
	ResetPassword,
	Dashboard,
	Pets,
	Categories,
	Breeds,
	Adoptions,
	Shelters,
	Veterinarians,
	/// Fallback for unmatched paths.
	NotFound,
}

/// Who may view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
	/// Anyone, signed in or not.
	Public,
	/// Any authenticated session.
	Authenticated,
	/// Sessions whose role is a member of the set.
	Roles(&'static [Role]),
}

/// One registered route.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
	pub path: &'static str,
	pub page: PageId,
	pub policy: AccessPolicy,
}

/// Exact-path route table.
///
/// Built once at startup with the builder methods, then only read.
///
/// # Example
///
/// ```
/// use pawhaven_router::{PageId, RouteTable};
///
/// let table = RouteTable::new()
///     .route("/login", PageId::Login)
///     .protected("/pets", PageId::Pets);
/// assert_eq!(table.lookup("/pets").unwrap().page, PageId::Pets);
/// assert!(table.lookup("/nope").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<RouteEntry>,
}

impl RouteTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a public route.
	pub fn route(mut self, path: &'static str, page: PageId) -> Self {
		self.routes.push(RouteEntry {
			path,
			page,
			policy: AccessPolicy::Public,
		});
		self
	}

	/// Registers a route requiring any authenticated session.
	pub fn protected(mut self, path: &'static str, page: PageId) -> Self {
		self.routes.push(RouteEntry {
			path,
			page,
			policy: AccessPolicy::Authenticated,
		});
		self
	}

	/// Registers a route restricted to the given roles.
	pub fn restricted(
		mut self,
		path: &'static str,
		page: PageId,
		roles: &'static [Role],
	) -> Self {
		self.routes.push(RouteEntry {
			path,
			page,
			policy: AccessPolicy::Roles(roles),
		});
		self
	}

	/// Finds the entry matching `path` exactly.
	pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
		self.routes.iter().find(|r| r.path == path)
	}

	/// Number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// The platform's route table.
	pub fn platform() -> Self {
		Self::new()
			.route("/", PageId::Home)
			.route("/login", PageId::Login)
			.route("/register", PageId::Register)
			.route("/forgot-password", PageId::ForgotPassword)
			.route("/reset-password", PageId::ResetPassword)
			.restricted("/dashboard", PageId::Dashboard, &[Role::Admin])
			.protected("/pets", PageId::Pets)
			.restricted("/categories", PageId::Categories, &[Role::Admin])
			.restricted("/breeds", PageId::Breeds, &[Role::Admin])
			.restricted(
				"/adoptions",
				PageId::Adoptions,
				&[Role::User, Role::Admin, Role::Shelter],
			)
			.restricted("/shelters", PageId::Shelters, &[Role::Admin, Role::Shelter])
			.restricted(
				"/veterinarians",
				PageId::Veterinarians,
				&[Role::Admin, Role::Veterinarian],
			)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_platform_table_registers_every_screen() {
		let table = RouteTable::platform();
		assert_eq!(table.route_count(), 12);
		for path in [
			"/",
			"/login",
			"/register",
			"/forgot-password",
			"/reset-password",
			"/dashboard",
			"/pets",
			"/categories",
			"/breeds",
			"/adoptions",
			"/shelters",
			"/veterinarians",
		] {
			assert!(table.lookup(path).is_some(), "missing route {path}");
		}
	}

	#[test]
	fn test_lookup_is_exact() {
		let table = RouteTable::platform();
		assert!(table.lookup("/pets/").is_none());
		assert!(table.lookup("/Pets").is_none());
	}
}
