use super::nav_bar;
use urdfhub_core::{IntoPage, Page, PageElement, View, ViewContext};

/// Landing page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl View for HomePage {
	fn name(&self) -> &str {
		"HomePage"
	}

	fn render(&self, ctx: &ViewContext<'_>) -> Page {
		let renderer_status = if ctx.renderer.is_available() {
			match ctx.renderer.revision() {
				Some(revision) => format!("3D preview: {} r{}", ctx.renderer.backend(), revision),
				None => format!("3D preview: {}", ctx.renderer.backend()),
			}
		} else {
			"3D preview unavailable".to_string()
		};

		PageElement::new("main")
			.attr("class", "urdfhub-home")
			.child(nav_bar())
			.child(PageElement::new("h1").child("URDF Hub"))
			.child(
				PageElement::new("p")
					.child("Browse, preview and create URDF robot description files."),
			)
			.child(
				PageElement::new("p")
					.attr("class", "renderer-status")
					.child(renderer_status),
			)
			.into_page()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use urdfhub_core::{Diagnostics, NullRenderer, SceneRenderer};

	struct FakeThree;

	impl SceneRenderer for FakeThree {
		fn backend(&self) -> &str {
			"three"
		}

		fn revision(&self) -> Option<String> {
			Some("160".to_string())
		}
	}

	fn render_with(renderer: &dyn SceneRenderer) -> Page {
		let diagnostics = Diagnostics::disabled();
		let ctx = ViewContext {
			path: "/",
			props: None,
			renderer,
			diagnostics: &diagnostics,
			trace: &[],
		};
		HomePage.render(&ctx)
	}

	#[rstest]
	fn test_home_reports_bound_renderer() {
		let text = render_with(&FakeThree).text_content();

		assert!(text.contains("URDF Hub"));
		assert!(text.contains("3D preview: three r160"));
	}

	#[rstest]
	fn test_home_reports_missing_renderer() {
		let text = render_with(&NullRenderer).text_content();

		assert!(text.contains("3D preview unavailable"));
	}

	#[rstest]
	fn test_home_links_to_other_views() {
		let html = render_with(&NullRenderer).render_to_string();

		assert!(html.contains(r#"href="/browser""#));
		assert!(html.contains(r#"href="/create""#));
	}
}
