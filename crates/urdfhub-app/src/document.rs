//! Host document abstraction.
//!
//! The application only needs two things from its host: finding the mount
//! element by selector, and replacing that element's markup. Browsers
//! provide them through [`BrowserDocument`]; native builds and tests use
//! [`MemoryDocument`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// An element the application can render into.
pub trait HostElement {
	fn set_inner_html(&self, html: &str);

	fn inner_html(&self) -> String;
}

/// A document that can look up host elements.
pub trait HostDocument {
	/// Returns the first element matching `selector`.
	fn query(&self, selector: &str) -> Option<Rc<dyn HostElement>>;
}

/// In-memory element. Clones share the same markup.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
	html: Rc<RefCell<String>>,
}

impl MemoryElement {
	pub fn new() -> Self {
		Self::default()
	}
}

impl HostElement for MemoryElement {
	fn set_inner_html(&self, html: &str) {
		*self.html.borrow_mut() = html.to_string();
	}

	fn inner_html(&self) -> String {
		self.html.borrow().clone()
	}
}

/// In-memory document holding elements by exact selector.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
	elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an empty element reachable through `selector`.
	pub fn with_element(mut self, selector: impl Into<String>) -> Self {
		self.elements.insert(selector.into(), MemoryElement::new());
		self
	}

	/// Returns a handle to the element registered under `selector`.
	pub fn element(&self, selector: &str) -> Option<MemoryElement> {
		self.elements.get(selector).cloned()
	}
}

impl HostDocument for MemoryDocument {
	fn query(&self, selector: &str) -> Option<Rc<dyn HostElement>> {
		self.element(selector)
			.map(|element| Rc::new(element) as Rc<dyn HostElement>)
	}
}

/// Browser document.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl BrowserDocument {
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}
}

#[cfg(target_arch = "wasm32")]
impl HostDocument for BrowserDocument {
	fn query(&self, selector: &str) -> Option<Rc<dyn HostElement>> {
		match self.document.query_selector(selector) {
			Ok(Some(element)) => Some(Rc::new(BrowserElement(element)) as Rc<dyn HostElement>),
			Ok(None) => None,
			Err(_) => {
				tracing::warn!(selector, "Invalid host selector");
				None
			}
		}
	}
}

#[cfg(target_arch = "wasm32")]
struct BrowserElement(web_sys::Element);

#[cfg(target_arch = "wasm32")]
impl HostElement for BrowserElement {
	// SAFETY(XSS): callers pass markup produced by Page::render_to_string,
	// which escapes all dynamic text and attribute values.
	fn set_inner_html(&self, html: &str) {
		self.0.set_inner_html(html);
	}

	fn inner_html(&self) -> String {
		self.0.inner_html()
	}
}
