//! Role-based access checks for routes.

use crate::session::Session;
use pawhaven_types::Role;

/// Route an unauthenticated visitor is sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Landing route for authenticated users lacking a required role.
pub const DEFAULT_LANDING_ROUTE: &str = "/pets";

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
	/// The session may view the route.
	Granted,
	/// The session may not; navigation is redirected instead.
	Denied {
		/// Fragment path to redirect to.
		redirect: &'static str,
	},
}

impl Access {
	/// True for [`Access::Granted`].
	pub fn is_granted(&self) -> bool {
		matches!(self, Self::Granted)
	}
}

/// Decides whether `session` may view a route requiring `required`
/// roles.
///
/// Pure and synchronous; never performs I/O and never errors.
///
/// - With no session, access is always denied toward [`LOGIN_ROUTE`].
/// - With a session and `required` absent, access is granted: the
///   route only demands authentication.
/// - With a session and `required` present, the session's role must be
///   a member; otherwise the denial targets [`DEFAULT_LANDING_ROUTE`]
///   rather than the sign-in screen, since the user is already signed
///   in.
pub fn authorize(session: Option<&Session>, required: Option<&[Role]>) -> Access {
	let Some(session) = session else {
		return Access::Denied {
			redirect: LOGIN_ROUTE,
		};
	};

	match required {
		None => Access::Granted,
		Some(roles) if roles.contains(&session.role) => Access::Granted,
		Some(_) => Access::Denied {
			redirect: DEFAULT_LANDING_ROUTE,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn session(role: Role) -> Session {
		Session {
			user_id: 1,
			username: "casey".into(),
			role,
			token: "tok".into(),
		}
	}

	#[test]
	fn test_no_session_is_denied_toward_login() {
		assert_eq!(
			authorize(None, None),
			Access::Denied {
				redirect: LOGIN_ROUTE
			}
		);
		assert_eq!(
			authorize(None, Some(&[Role::Admin])),
			Access::Denied {
				redirect: LOGIN_ROUTE
			}
		);
	}

	#[test]
	fn test_any_session_passes_when_no_roles_required() {
		assert!(authorize(Some(&session(Role::User)), None).is_granted());
		assert!(authorize(Some(&session(Role::Veterinarian)), None).is_granted());
	}

	#[rstest]
	#[case(Role::Admin, &[Role::Admin], true)]
	#[case(Role::User, &[Role::Admin], false)]
	#[case(Role::Shelter, &[Role::Admin, Role::Shelter], true)]
	#[case(Role::Veterinarian, &[Role::User, Role::Admin, Role::Shelter], false)]
	fn test_role_membership_decides(
		#[case] role: Role,
		#[case] required: &[Role],
		#[case] granted: bool,
	) {
		let access = authorize(Some(&session(role)), Some(required));
		assert_eq!(access.is_granted(), granted);
	}

	#[test]
	fn test_insufficient_role_redirects_to_landing_not_login() {
		let access = authorize(Some(&session(Role::User)), Some(&[Role::Admin]));
		assert_eq!(
			access,
			Access::Denied {
				redirect: DEFAULT_LANDING_ROUTE
			}
		);
	}
}
