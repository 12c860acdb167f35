//! Browser entry wiring.
//!
//! Mounts the app into a root element, re-renders on every hashchange,
//! and translates clicks on pagination controls into fragment
//! assignments. Navigation is always an explicit fragment write; the
//! router reacts to the resulting event.

use crate::app::App;
use pawhaven_api::ApiConfig;
use pawhaven_auth::LocalStorageStore;
use pawhaven_router::{BrowserNavigator, Fragment, NavigationSurface, on_fragment_change};
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;

/// Boots the admin app into the element with id `root_id`.
pub fn mount(root_id: &'static str) {
	let navigator = Arc::new(BrowserNavigator::new());
	// Direct links (password-reset email) arrive as a plain path with
	// a query; fold them into fragment form before the first resolve.
	navigator.rewrite_plain_entry();

	let app = Rc::new(App::new(
		ApiConfig::default(),
		Arc::new(LocalStorageStore::new()),
		navigator.clone(),
	));

	render(app.clone(), root_id);
	{
		let app = app.clone();
		on_fragment_change(move || render(app.clone(), root_id));
	}
	wire_interactions(app, navigator);
}

fn render(app: Rc<App>, root_id: &'static str) {
	spawn_local(async move {
		let view = app.render_current().await;
		let root = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(root_id));
		if let Some(root) = root {
			root.set_inner_html(&view.render_to_string());
		}
	});
}

/// Delegated listeners for the controls the pages render.
fn wire_interactions(app: Rc<App>, navigator: Arc<BrowserNavigator>) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	// Pagination buttons and sign-out.
	{
		let app = app.clone();
		let navigator = navigator.clone();
		let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
			let Some(target) = event
				.target()
				.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
			else {
				return;
			};

			if let Ok(Some(button)) = target.closest("[data-page]") {
				if let Some(page) = button.get_attribute("data-page") {
					let next = Fragment::parse(&navigator.fragment()).with_param("page", &page);
					navigator.assign(&next.to_fragment_string());
				}
				return;
			}

			if target.closest("[data-action=\"sign-out\"]").ok().flatten().is_some() {
				app.sessions().logout();
				navigator.assign("/login");
			}
		});
		let _ = document
			.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}

	// Page-size selector.
	{
		let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
			let Some(select) = event
				.target()
				.and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
			else {
				return;
			};
			if select.get_attribute("data-role").as_deref() != Some("page-size") {
				return;
			}
			// A size change always restarts at the first page.
			let next = Fragment::parse(&navigator.fragment())
				.with_param("size", &select.value())
				.with_param("page", "1");
			navigator.assign(&next.to_fragment_string());
		});
		let _ = document
			.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
		on_change.forget();
	}
}
