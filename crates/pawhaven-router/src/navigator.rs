//! The navigation surface: reading and assigning the location fragment.
//!
//! Navigation is an explicit call on this seam: pages hand a target
//! path to [`navigate`] instead of touching the location themselves.
//! The browser implementation drives `window.location`; the in-memory
//! implementation backs native builds and tests.

use parking_lot::RwLock;

/// Abstraction over the location fragment.
///
/// Fragments are passed without the leading `#`.
pub trait NavigationSurface: Send + Sync {
	/// The current fragment.
	fn fragment(&self) -> String;

	/// Assigns a new fragment, creating a history entry.
	fn assign(&self, fragment: &str);

	/// Replaces the current fragment without a history entry. Used for
	/// guard redirects so denied targets don't pollute history.
	fn replace(&self, fragment: &str);
}

/// Navigates to an application path, e.g. `navigate(&nav, "/pets")`.
pub fn navigate(surface: &dyn NavigationSurface, path: &str) {
	surface.assign(path);
}

/// In-memory navigation surface for native builds and tests.
///
/// # Examples
///
/// ```
/// use pawhaven_router::{MemoryNavigator, NavigationSurface, navigate};
///
/// let nav = MemoryNavigator::new();
/// navigate(&nav, "/pets");
/// assert_eq!(nav.fragment(), "/pets");
/// ```
#[derive(Debug)]
pub struct MemoryNavigator {
	current: RwLock<String>,
	history: RwLock<Vec<String>>,
}

impl MemoryNavigator {
	/// Creates a surface positioned at the root fragment.
	pub fn new() -> Self {
		Self {
			current: RwLock::new("/".to_string()),
			history: RwLock::new(vec!["/".to_string()]),
		}
	}

	/// Creates a surface positioned at `fragment`.
	pub fn starting_at(fragment: &str) -> Self {
		Self {
			current: RwLock::new(fragment.to_string()),
			history: RwLock::new(vec![fragment.to_string()]),
		}
	}

	/// Every fragment visited through `assign`, oldest first.
	pub fn history(&self) -> Vec<String> {
		self.history.read().clone()
	}
}

impl Default for MemoryNavigator {
	fn default() -> Self {
		Self::new()
	}
}

impl NavigationSurface for MemoryNavigator {
	fn fragment(&self) -> String {
		self.current.read().clone()
	}

	fn assign(&self, fragment: &str) {
		*self.current.write() = fragment.to_string();
		self.history.write().push(fragment.to_string());
	}

	fn replace(&self, fragment: &str) {
		*self.current.write() = fragment.to_string();
		if let Some(last) = self.history.write().last_mut() {
			*last = fragment.to_string();
		}
	}
}

/// Browser navigation surface over `window.location`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl BrowserNavigator {
	/// Creates a handle over the window location.
	pub fn new() -> Self {
		Self
	}

	/// Applies the one-time plain-path entry rewrite (see
	/// [`crate::entry_rewrite`]), preserving any query string carried
	/// by a direct link such as the password-reset email.
	pub fn rewrite_plain_entry(&self) {
		let Some(location) = web_sys::window().map(|w| w.location()) else {
			return;
		};
		let path = location.pathname().unwrap_or_default();
		let search = location.search().unwrap_or_default();
		if let Some(fragment) = crate::entry_rewrite(&path, &search) {
			let _ = location.replace(&format!("/#{fragment}"));
		}
	}

	fn location() -> Option<web_sys::Location> {
		web_sys::window().map(|w| w.location())
	}
}

#[cfg(target_arch = "wasm32")]
impl NavigationSurface for BrowserNavigator {
	fn fragment(&self) -> String {
		let hash = Self::location()
			.and_then(|l| l.hash().ok())
			.unwrap_or_default();
		let trimmed = hash.strip_prefix('#').unwrap_or(&hash);
		if trimmed.is_empty() {
			"/".to_string()
		} else {
			trimmed.to_string()
		}
	}

	fn assign(&self, fragment: &str) {
		if let Some(location) = Self::location() {
			let _ = location.set_hash(fragment);
		}
	}

	fn replace(&self, fragment: &str) {
		if let Some(location) = Self::location() {
			let _ = location.replace(&format!("#{fragment}"));
		}
	}
}

/// Invokes `handler` on every `hashchange` event for the lifetime of
/// the page. The closure is intentionally leaked: the listener lives as
/// long as the document.
#[cfg(target_arch = "wasm32")]
pub fn on_fragment_change(handler: impl FnMut() + 'static) {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::closure::Closure;

	let Some(window) = web_sys::window() else {
		return;
	};
	let closure = Closure::<dyn FnMut()>::new(handler);
	let _ = window
		.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
	closure.forget();
}
