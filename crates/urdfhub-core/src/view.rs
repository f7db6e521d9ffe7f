//! The view contract.
//!
//! Views are opaque renderable units. The router only stores shared
//! references to them ([`ViewRef`]); the application calls
//! [`View::render`] with a [`ViewContext`] whenever the current route
//! changes.

use crate::diagnostics::{Diagnostics, Warning};
use crate::page::Page;
use crate::renderer::SceneRenderer;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Shared reference to a view held by a route.
pub type ViewRef = Arc<dyn View>;

/// A page view.
pub trait View: Send + Sync {
	/// Component name, used as the source of diagnostics.
	fn name(&self) -> &str;

	/// Renders the view.
	fn render(&self, ctx: &ViewContext<'_>) -> Page;
}

impl fmt::Debug for dyn View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("View").field("name", &self.name()).finish()
	}
}

/// Data forwarded from the requested location to a view.
///
/// Keys are kept sorted so that rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteProps(BTreeMap<String, String>);

impl RouteProps {
	/// Creates an empty set of props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Inserts a value, replacing any previous one.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	/// Iterates over the props in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteProps {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// Everything a view may use while rendering.
///
/// Capabilities are passed explicitly rather than looked up from globals.
pub struct ViewContext<'a> {
	/// Path component of the current location.
	pub path: &'a str,
	/// Forwarded props, present only for routes that forward them.
	pub props: Option<&'a RouteProps>,
	/// 3D scene renderer.
	pub renderer: &'a dyn SceneRenderer,
	/// Warning hook.
	pub diagnostics: &'a Diagnostics,
	/// Enclosing components, innermost first. Attached to every warning.
	pub trace: &'a [String],
}

impl<'a> ViewContext<'a> {
	/// Returns a forwarded prop, if the route forwards props and the key is set.
	pub fn prop(&self, key: &str) -> Option<&'a str> {
		self.props.and_then(|props| props.get(key))
	}

	/// Raises a warning attributed to `view`, carrying the context's trace.
	pub fn warn(&self, view: &dyn View, message: impl Into<String>) {
		self.diagnostics
			.report(Warning::new(view.name(), message).with_trace(self.trace.iter().cloned()))
	}
}

/// A view backed by a closure.
///
/// ```ignore
/// let about = view_fn("About", |_ctx| Page::text("about"));
/// ```
pub struct FnView<F> {
	name: String,
	render: F,
}

impl<F> View for FnView<F>
where
	F: Fn(&ViewContext<'_>) -> Page + Send + Sync,
{
	fn name(&self) -> &str {
		&self.name
	}

	fn render(&self, ctx: &ViewContext<'_>) -> Page {
		(self.render)(ctx)
	}
}

/// Wraps a closure as a shared view.
pub fn view_fn<F>(name: impl Into<String>, render: F) -> ViewRef
where
	F: Fn(&ViewContext<'_>) -> Page + Send + Sync + 'static,
{
	Arc::new(FnView {
		name: name.into(),
		render,
	})
}
