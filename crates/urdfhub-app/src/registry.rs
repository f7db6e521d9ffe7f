//! Mapping from configured view keys to view implementations.

use crate::error::BootstrapError;
use crate::settings::RouteConfig;
use crate::views::{CreateFile, FileBrowser, HomePage, NotFound};
use std::collections::HashMap;
use std::sync::Arc;
use urdfhub_core::{View, ViewRef};
use urdfhub_router::Route;

/// Views available to the route table, keyed by the names used in settings.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
	views: HashMap<String, ViewRef>,
	not_found: ViewRef,
}

impl Default for ViewRegistry {
	/// Registry with the built-in views: `home`, `file_browser`, `create_file`.
	fn default() -> Self {
		Self::empty()
			.with("home", HomePage)
			.with("file_browser", FileBrowser)
			.with("create_file", CreateFile)
	}
}

impl ViewRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry without any views. The built-in [`NotFound`] view is kept.
	pub fn empty() -> Self {
		Self {
			views: HashMap::new(),
			not_found: Arc::new(NotFound),
		}
	}

	/// Registers `view` under `key`, replacing any previous entry.
	pub fn with(mut self, key: impl Into<String>, view: impl View + 'static) -> Self {
		self.insert(key, Arc::new(view));
		self
	}

	/// Registers a shared view under `key`, returning the replaced entry.
	pub fn insert(&mut self, key: impl Into<String>, view: ViewRef) -> Option<ViewRef> {
		self.views.insert(key.into(), view)
	}

	/// Replaces the view rendered for unresolved locations.
	pub fn with_not_found(mut self, view: impl View + 'static) -> Self {
		self.not_found = Arc::new(view);
		self
	}

	pub fn get(&self, key: &str) -> Option<&ViewRef> {
		self.views.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.views.contains_key(key)
	}

	pub fn not_found(&self) -> &ViewRef {
		&self.not_found
	}

	pub fn len(&self) -> usize {
		self.views.len()
	}

	pub fn is_empty(&self) -> bool {
		self.views.is_empty()
	}

	/// Turns configured routes into router routes, in order.
	///
	/// # Errors
	///
	/// Returns [`BootstrapError::UnknownView`] for the first route whose view
	/// key is not registered.
	pub fn build_routes(&self, configs: &[RouteConfig]) -> Result<Vec<Route>, BootstrapError> {
		configs
			.iter()
			.map(|config| {
				let view = self
					.get(&config.view)
					.ok_or_else(|| BootstrapError::UnknownView {
						route: config.name.clone(),
						view: config.view.clone(),
					})?;
				Ok(Route::new(&config.name, &config.path, Arc::clone(view))
					.props_from_path(config.props_from_path))
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::Settings;
	use rstest::rstest;
	use urdfhub_core::{Page, view_fn};

	#[rstest]
	fn test_default_registry_has_builtin_views() {
		let registry = ViewRegistry::default();

		assert_eq!(registry.len(), 3);
		for key in ["home", "file_browser", "create_file"] {
			assert!(registry.contains(key), "missing {key}");
		}
		assert_eq!(registry.not_found().name(), "NotFound");
	}

	#[rstest]
	fn test_build_routes_from_default_settings() {
		let registry = ViewRegistry::default();

		let routes = registry.build_routes(&Settings::default().routes).unwrap();

		let summary: Vec<_> = routes
			.iter()
			.map(|r| (r.name(), r.path(), r.view().name(), r.forwards_props()))
			.collect();
		assert_eq!(
			summary,
			vec![
				("Home", "/", "HomePage", false),
				("FileBrowser", "/browser", "FileBrowser", true),
				("CreateFile", "/create", "CreateFile", false),
			]
		);
	}

	#[rstest]
	fn test_unknown_view_key_fails() {
		let registry = ViewRegistry::default();
		let configs = vec![
			RouteConfig::new("Home", "/", "home"),
			RouteConfig::new("Viewer", "/viewer", "viewer"),
		];

		let result = registry.build_routes(&configs);

		assert!(matches!(
			result,
			Err(BootstrapError::UnknownView { ref route, ref view })
				if route == "Viewer" && view == "viewer"
		));
	}

	#[rstest]
	fn test_insert_replaces_view() {
		let mut registry = ViewRegistry::default();

		let previous = registry.insert("home", view_fn("Landing", |_| Page::text("hi")));

		assert_eq!(previous.unwrap().name(), "HomePage");
		assert_eq!(registry.get("home").unwrap().name(), "Landing");
	}
}
