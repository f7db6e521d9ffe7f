//! Built-in page views.
//!
//! These are intentionally thin: they show which route is active and what
//! the route forwarded, and leave file handling to the backend.

mod create_file;
mod file_browser;
mod home;
mod not_found;

pub use create_file::CreateFile;
pub use file_browser::FileBrowser;
pub use home::HomePage;
pub use not_found::NotFound;

use urdfhub_core::PageElement;

/// Navigation bar shared by every built-in view.
pub(crate) fn nav_bar() -> PageElement {
	PageElement::new("nav").attr("class", "urdfhub-nav").children([
		link("/", "Home"),
		link("/browser", "Browse files"),
		link("/create", "New file"),
	])
}

pub(crate) fn link(href: &'static str, label: &'static str) -> PageElement {
	PageElement::new("a").attr("href", href).child(label)
}

/// Whether `href` is a path on this origin, as opposed to an absolute or
/// protocol-relative URL. Only such links are routed client-side.
pub fn is_internal_href(href: &str) -> bool {
	href.starts_with('/') && !href.starts_with("//")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", true)]
	#[case("/browser?dir=meshes", true)]
	#[case("//cdn.example.com/three.js", false)]
	#[case("https://example.com/", false)]
	#[case("robot.urdf", false)]
	#[case("#top", false)]
	fn test_is_internal_href(#[case] href: &str, #[case] expected: bool) {
		assert_eq!(is_internal_href(href), expected);
	}

	#[rstest]
	fn test_nav_links_are_internal() {
		let html = nav_bar().child_pages().iter().map(|p| p.render_to_string()).collect::<String>();

		for href in ["/", "/browser", "/create"] {
			assert!(html.contains(&format!(r#"href="{href}""#)));
			assert!(is_internal_href(href));
		}
	}
}
