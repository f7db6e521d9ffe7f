//! Property tests for route table validation and resolution.

use proptest::collection::hash_set;
use proptest::prelude::*;
use urdfhub_core::{Page, view_fn};
use urdfhub_router::{MemoryHistory, Route, Router, RouterError};

fn segment() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9_-]{0,11}"
}

/// A table of unique non-root paths with matching unique names, plus `/`.
fn unique_routes() -> impl Strategy<Value = Vec<(String, String)>> {
	hash_set(segment(), 0..12).prop_map(|segments| {
		let mut routes = vec![("Root".to_string(), "/".to_string())];
		routes.extend(
			segments
				.into_iter()
				.map(|s| (format!("route_{}", s), format!("/{}", s))),
		);
		routes
	})
}

fn build(routes: &[(String, String)]) -> Vec<Route> {
	routes
		.iter()
		.map(|(name, path)| {
			let label = name.clone();
			Route::new(
				name.clone(),
				path.clone(),
				view_fn(name.clone(), move |_| Page::text(label.clone())),
			)
		})
		.collect()
}

proptest! {
	#[test]
	fn prop_unique_table_resolves_each_path(routes in unique_routes()) {
		let router = Router::register(build(&routes), MemoryHistory::default()).unwrap();

		for (name, path) in &routes {
			let resolution = router.resolve(path);
			prop_assert_eq!(resolution.route_name(), Some(name.as_str()));
			let view_name = resolution.resolved().map(|r| r.view.name().to_string());
			prop_assert_eq!(view_name, Some(name.clone()));
		}
	}

	#[test]
	fn prop_duplicate_path_always_fails(routes in unique_routes(), pick in any::<prop::sample::Index>()) {
		let (_, path) = routes[pick.index(routes.len())].clone();
		let mut table = build(&routes);
		table.push(Route::new("duplicate", path, view_fn("duplicate", |_| Page::Empty)));

		let result = Router::register(table, MemoryHistory::default());

		let is_duplicate_path = matches!(result, Err(RouterError::DuplicatePath { .. }));
		prop_assert!(is_duplicate_path);
	}

	#[test]
	fn prop_duplicate_name_always_fails(routes in unique_routes(), pick in any::<prop::sample::Index>()) {
		let (name, _) = routes[pick.index(routes.len())].clone();
		let mut table = build(&routes);
		table.push(Route::new(name, "/~duplicate", view_fn("duplicate", |_| Page::Empty)));

		let result = Router::register(table, MemoryHistory::default());

		let is_duplicate_name = matches!(result, Err(RouterError::DuplicateName { .. }));
		prop_assert!(is_duplicate_name);
	}
}
