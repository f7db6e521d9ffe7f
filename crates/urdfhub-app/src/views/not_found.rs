use super::link;
use urdfhub_core::{IntoPage, Page, PageElement, View, ViewContext};

/// Shown when the current location matches no route.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl View for NotFound {
	fn name(&self) -> &str {
		"NotFound"
	}

	fn render(&self, ctx: &ViewContext<'_>) -> Page {
		PageElement::new("main")
			.attr("class", "urdfhub-not-found")
			.child(PageElement::new("h1").child("404 Not Found"))
			.child(PageElement::new("p").child(format!("No page at {}", ctx.path)))
			.child(link("/", "Back to home"))
			.into_page()
	}
}
