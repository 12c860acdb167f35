//! Page components and application shell for the Pawhaven admin front
//! end.
//!
//! Screens are plain components over fetched data: a list screen owns
//! its collection, the filters parsed from the route and a paginator
//! over the filtered result, and renders a [`view::View`] tree. The
//! [`app::App`] shell resolves the current fragment through the router
//! and dispatches to the matching screen; on wasm32 the [`boot`]
//! module mounts the shell into the document and re-renders on every
//! hashchange.

pub mod app;
pub mod components;
pub mod filters;
pub mod format;
pub mod layout;
pub mod pages;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod boot;

pub use app::App;
pub use components::{Link, badge, pagination_controls, table};
pub use filters::{AdoptionFilters, PetFilters};
pub use layout::layout;
pub use view::{Component, ElementView, IntoView, View};
