//! Minimal view tree for rendering pages.
//!
//! Pages build a [`View`] (element, text, fragment or nothing) and
//! the shell serializes it with [`View::render_to_string`]. There is no
//! diffing or reactivity: a fragment change re-renders the whole page,
//! which is plenty for admin-sized screens.

/// A renderable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// Renders nothing.
	Empty,
	/// Escaped text content.
	Text(String),
	/// An element with attributes and children.
	Element(ElementView),
	/// A sequence of sibling nodes.
	Fragment(Vec<View>),
}

impl View {
	/// Creates a text node.
	pub fn text(content: impl Into<String>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment of sibling nodes.
	pub fn fragment(children: Vec<View>) -> Self {
		Self::Fragment(children)
	}

	/// Serializes the tree to HTML.
	pub fn render_to_string(&self) -> String {
		let mut out = String::new();
		self.write(&mut out);
		out
	}

	fn write(&self, out: &mut String) {
		match self {
			Self::Empty => {}
			Self::Text(text) => out.push_str(&escape_text(text)),
			Self::Element(el) => el.write(out),
			Self::Fragment(children) => {
				for child in children {
					child.write(out);
				}
			}
		}
	}
}

/// Elements that never take children or a closing tag.
const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// Builder for an element node.
///
/// # Example
///
/// ```
/// use pawhaven_pages::view::{ElementView, IntoView};
///
/// let html = ElementView::new("p")
///     .attr("class", "greeting")
///     .child("Hello")
///     .into_view()
///     .render_to_string();
/// assert_eq!(html, r#"<p class="greeting">Hello</p>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: String,
	attrs: Vec<(String, String)>,
	children: Vec<View>,
}

impl ElementView {
	/// Starts an element with the given tag.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends a child node.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Appends several child nodes.
	pub fn children(mut self, children: Vec<View>) -> Self {
		self.children.extend(children);
		self
	}

	fn write(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.tag);
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&escape_attr(value));
			out.push('"');
		}
		out.push('>');

		if VOID_TAGS.contains(&self.tag.as_str()) {
			return;
		}

		for child in &self.children {
			child.write(out);
		}
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
	}
}

/// Conversion into a [`View`] node.
pub trait IntoView {
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(self)
	}
}

impl IntoView for &str {
	fn into_view(self) -> View {
		View::Text(self.to_string())
	}
}

impl IntoView for Vec<View> {
	fn into_view(self) -> View {
		View::Fragment(self)
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(inner) => inner.into_view(),
			None => View::Empty,
		}
	}
}

/// A reusable page building block.
pub trait Component {
	/// Renders the component to a view tree.
	fn render(&self) -> View;

	/// The component's name, for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

fn escape_text(raw: &str) -> String {
	raw.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
	escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nested_elements_render() {
		let view = ElementView::new("div")
			.attr("id", "root")
			.child(ElementView::new("span").child("hi"))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			r#"<div id="root"><span>hi</span></div>"#
		);
	}

	#[test]
	fn test_text_is_escaped() {
		let view = View::text("a < b & c");
		assert_eq!(view.render_to_string(), "a &lt; b &amp; c");
	}

	#[test]
	fn test_attr_quotes_are_escaped() {
		let view = ElementView::new("div")
			.attr("title", r#"say "hi""#)
			.into_view();
		assert_eq!(
			view.render_to_string(),
			r#"<div title="say &quot;hi&quot;"></div>"#
		);
	}

	#[test]
	fn test_void_tags_have_no_closing_tag() {
		let view = ElementView::new("input").attr("type", "text").into_view();
		assert_eq!(view.render_to_string(), r#"<input type="text">"#);
	}

	#[test]
	fn test_fragment_concatenates_children() {
		let view = View::fragment(vec![View::text("a"), View::Empty, View::text("b")]);
		assert_eq!(view.render_to_string(), "ab");
	}
}
