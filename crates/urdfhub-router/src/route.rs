//! Route declarations and the validated route table.

use crate::error::RouterError;
use std::collections::HashMap;
use std::fmt;
use urdfhub_core::ViewRef;

/// Path of the route every table must contain.
pub const ROOT_PATH: &str = "/";

/// A single route definition.
#[derive(Clone)]
pub struct Route {
	/// Symbolic name used for programmatic navigation.
	name: String,
	/// Exact URL path.
	path: String,
	/// The view rendered when this route resolves.
	view: ViewRef,
	/// Whether query parameters are forwarded to the view as props.
	props_from_path: bool,
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("name", &self.name)
			.field("path", &self.path)
			.field("view", &self.view.name())
			.field("props_from_path", &self.props_from_path)
			.finish()
	}
}

impl Route {
	/// Creates a route that forwards no props.
	pub fn new(name: impl Into<String>, path: impl Into<String>, view: ViewRef) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			view,
			props_from_path: false,
		}
	}

	/// Forwards query parameters to the view.
	pub fn with_props(self) -> Self {
		self.props_from_path(true)
	}

	/// Sets whether query parameters are forwarded to the view.
	pub fn props_from_path(mut self, enabled: bool) -> Self {
		self.props_from_path = enabled;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn view(&self) -> &ViewRef {
		&self.view
	}

	pub fn forwards_props(&self) -> bool {
		self.props_from_path
	}

	fn validate(&self) -> Result<(), RouterError> {
		if self.name.trim().is_empty() {
			return Err(RouterError::EmptyName {
				path: self.path.clone(),
			});
		}

		let reason = if !self.path.starts_with('/') {
			Some("path must start with '/'")
		} else if self.path.contains(['?', '#']) {
			Some("path must not contain a query or fragment")
		} else if self.path.chars().any(char::is_whitespace) {
			Some("path must not contain whitespace")
		} else {
			None
		};

		match reason {
			Some(reason) => Err(RouterError::InvalidPath {
				name: self.name.clone(),
				path: self.path.clone(),
				reason,
			}),
			None => Ok(()),
		}
	}
}

/// An ordered, validated set of routes.
///
/// Construction enforces that paths and names are unique and that exactly one
/// route serves `/`. The table cannot be modified afterwards.
pub struct RouteTable {
	routes: Vec<Route>,
	by_path: HashMap<String, usize>,
	by_name: HashMap<String, usize>,
}

impl fmt::Debug for RouteTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteTable")
			.field("routes", &self.routes)
			.finish()
	}
}

impl RouteTable {
	/// Validates `routes` and builds the table.
	///
	/// # Errors
	///
	/// Returns the first configuration fault found, in declaration order:
	/// an empty name, an invalid path, a duplicate path or a duplicate name.
	/// [`RouterError::MissingRoot`] is returned when every route is valid but
	/// none serves `/`.
	pub fn new(routes: Vec<Route>) -> Result<Self, RouterError> {
		let mut by_path = HashMap::with_capacity(routes.len());
		let mut by_name = HashMap::with_capacity(routes.len());

		for (index, route) in routes.iter().enumerate() {
			route.validate()?;

			if let Some(&existing) = by_path.get(route.path()) {
				let existing: &Route = &routes[existing];
				return Err(RouterError::DuplicatePath {
					path: route.path().to_string(),
					first: existing.name().to_string(),
					second: route.name().to_string(),
				});
			}
			if let Some(&existing) = by_name.get(route.name()) {
				let existing: &Route = &routes[existing];
				return Err(RouterError::DuplicateName {
					name: route.name().to_string(),
					first: existing.path().to_string(),
					second: route.path().to_string(),
				});
			}

			by_path.insert(route.path().to_string(), index);
			by_name.insert(route.name().to_string(), index);
		}

		if !by_path.contains_key(ROOT_PATH) {
			return Err(RouterError::MissingRoot);
		}

		Ok(Self {
			routes,
			by_path,
			by_name,
		})
	}

	/// Finds the route registered for an exact path.
	pub fn find_by_path(&self, path: &str) -> Option<&Route> {
		self.by_path.get(path).map(|&i| &self.routes[i])
	}

	/// Finds a route by name.
	pub fn find_by_name(&self, name: &str) -> Option<&Route> {
		self.by_name.get(name).map(|&i| &self.routes[i])
	}

	/// Returns the route serving `/`.
	pub fn root(&self) -> Option<&Route> {
		self.find_by_path(ROOT_PATH)
	}

	/// Iterates over routes in declaration order.
	pub fn iter(&self) -> std::slice::Iter<'_, Route> {
		self.routes.iter()
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a Route;
	type IntoIter = std::slice::Iter<'a, Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use urdfhub_core::{Page, view_fn};

	fn view(name: &'static str) -> ViewRef {
		view_fn(name, move |_| Page::text(name))
	}

	#[fixture]
	fn canonical() -> Vec<Route> {
		vec![
			Route::new("Home", "/", view("Home")),
			Route::new("FileBrowser", "/browser", view("FileBrowser")).with_props(),
			Route::new("CreateFile", "/create", view("CreateFile")),
		]
	}

	#[rstest]
	fn test_table_lookup(canonical: Vec<Route>) {
		let table = RouteTable::new(canonical).unwrap();

		assert_eq!(table.len(), 3);
		assert_eq!(table.root().map(Route::name), Some("Home"));
		assert_eq!(
			table.find_by_name("FileBrowser").map(Route::path),
			Some("/browser")
		);
		assert!(table.find_by_path("/browser").unwrap().forwards_props());
		assert!(!table.find_by_path("/create").unwrap().forwards_props());
		assert!(table.find_by_path("/browser/").is_none());
	}

	#[rstest]
	fn test_table_keeps_declaration_order(canonical: Vec<Route>) {
		let table = RouteTable::new(canonical).unwrap();

		let names: Vec<_> = table.iter().map(Route::name).collect();
		assert_eq!(names, vec!["Home", "FileBrowser", "CreateFile"]);
	}

	#[rstest]
	fn test_duplicate_path_rejected(mut canonical: Vec<Route>) {
		canonical.push(Route::new("Files", "/browser", view("Files")));

		let err = RouteTable::new(canonical).unwrap_err();

		assert_eq!(
			err,
			RouterError::DuplicatePath {
				path: "/browser".to_string(),
				first: "FileBrowser".to_string(),
				second: "Files".to_string(),
			}
		);
	}

	#[rstest]
	fn test_duplicate_name_rejected(mut canonical: Vec<Route>) {
		canonical.push(Route::new("Home", "/home", view("Home")));

		let err = RouteTable::new(canonical).unwrap_err();

		assert_eq!(
			err,
			RouterError::DuplicateName {
				name: "Home".to_string(),
				first: "/".to_string(),
				second: "/home".to_string(),
			}
		);
	}

	#[rstest]
	fn test_missing_root_rejected() {
		let routes = vec![Route::new("CreateFile", "/create", view("CreateFile"))];

		assert_eq!(RouteTable::new(routes).unwrap_err(), RouterError::MissingRoot);
	}

	#[rstest]
	fn test_empty_table_rejected() {
		assert_eq!(RouteTable::new(Vec::new()).unwrap_err(), RouterError::MissingRoot);
	}

	#[rstest]
	#[case("browser")]
	#[case("/browser?dir=x")]
	#[case("/browser#top")]
	#[case("/file browser")]
	fn test_invalid_path_rejected(#[case] path: &str) {
		let routes = vec![
			Route::new("Home", "/", view("Home")),
			Route::new("Broken", path, view("Broken")),
		];

		let err = RouteTable::new(routes).unwrap_err();

		assert!(matches!(err, RouterError::InvalidPath { .. }));
		assert!(err.is_configuration_fault());
	}

	#[rstest]
	fn test_empty_name_rejected() {
		let routes = vec![Route::new("  ", "/", view("Home"))];

		assert_eq!(
			RouteTable::new(routes).unwrap_err(),
			RouterError::EmptyName {
				path: "/".to_string()
			}
		);
	}

	#[rstest]
	fn test_route_debug_shows_view_name() {
		let route = Route::new("Home", "/", view("HomePage"));

		let debug = format!("{:?}", route);

		assert!(debug.contains("HomePage"));
		assert!(debug.contains("props_from_path: false"));
	}
}
