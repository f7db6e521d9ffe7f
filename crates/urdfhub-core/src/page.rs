//! Page tree produced by views.
//!
//! A [`Page`] is a plain description of markup. Views build one with
//! [`PageElement`] and the application serialises it into the host element
//! with [`Page::render_to_string`].
//!
//! ```ignore
//! use urdfhub_core::page::{IntoPage, PageElement};
//!
//! let page = PageElement::new("h1")
//!     .attr("class", "title")
//!     .child("Files")
//!     .into_page();
//!
//! assert_eq!(page.render_to_string(), r#"<h1 class="title">Files</h1>"#);
//! ```

use std::borrow::Cow;

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// A renderable view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node. Escaped on render.
	Text(Cow<'static, str>),
	/// Several siblings without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// An element node in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
}

impl PageElement {
	/// Creates an element with the given tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoPage::into_page));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child pages.
	pub fn child_pages(&self) -> &[Page] {
		&self.children
	}

	fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&self.tag.as_ref())
	}
}

impl Page {
	/// Creates a text page.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Page::Text(text.into())
	}

	/// Serialises the page to an HTML string.
	///
	/// Text and attribute values are HTML-escaped.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());
				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}
				output.push('>');

				if el.is_void() {
					return;
				}

				for child in el.child_pages() {
					child.render_into(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			Page::Text(text) => output.push_str(&html_escape(text)),
			Page::Fragment(pages) => {
				for page in pages {
					page.render_into(output);
				}
			}
			Page::Empty => {}
		}
	}

	/// Concatenates the text content of the page, ignoring markup.
	pub fn text_content(&self) -> String {
		match self {
			Page::Element(el) => el.child_pages().iter().map(Page::text_content).collect(),
			Page::Text(text) => text.to_string(),
			Page::Fragment(pages) => pages.iter().map(Page::text_content).collect(),
			Page::Empty => String::new(),
		}
	}
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Conversion into a [`Page`].
pub trait IntoPage {
	/// Converts `self` into a page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(IntoPage::into_page).collect())
	}
}
