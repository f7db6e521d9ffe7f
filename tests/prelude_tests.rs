//! Facade smoke tests.

use rstest::rstest;
use urdfhub::prelude::*;

#[rstest]
fn test_prelude_starts_and_navigates() {
	let document = MemoryDocument::new().with_element("#app");
	let app = App::new(Settings::default()).mount(&document).unwrap();

	app.navigate(NavigationTarget::name("FileBrowser")).unwrap();

	assert_eq!(app.current_view().route_name(), Some("FileBrowser"));
	assert_eq!(app.current_location(), "/browser");
}

#[rstest]
fn test_router_usable_without_app() {
	let home = view_fn("Home", |_| Page::text("home"));
	let router = Router::register(vec![Route::new("Home", "/", home)], MemoryHistory::default())
		.unwrap();

	assert_eq!(router.resolve("/?tab=recent").route_name(), Some("Home"));
	assert_eq!(
		router.resolve("/Home"),
		Resolution::Unresolved {
			path: "/Home".to_string()
		}
	);
}
