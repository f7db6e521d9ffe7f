use super::nav_bar;
use urdfhub_core::{IntoPage, Page, PageElement, View, ViewContext};

/// Skeleton inserted into the editor for a new file.
pub const URDF_TEMPLATE: &str = r#"<?xml version="1.0"?>
<robot name="new_robot">
  <link name="base_link"/>
</robot>
"#;

/// Form for creating a new URDF file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateFile;

impl View for CreateFile {
	fn name(&self) -> &str {
		"CreateFile"
	}

	fn render(&self, _ctx: &ViewContext<'_>) -> Page {
		let form = PageElement::new("form")
			.attr("class", "urdfhub-create")
			.attr("method", "post")
			.child(
				PageElement::new("label")
					.attr("for", "filename")
					.child("File name"),
			)
			.child(
				PageElement::new("input")
					.attr("id", "filename")
					.attr("name", "filename")
					.attr("type", "text")
					.attr("pattern", r".+\.urdf")
					.attr("placeholder", "robot.urdf")
					.attr("required", "required"),
			)
			.child(
				PageElement::new("textarea")
					.attr("name", "content")
					.attr("rows", "16")
					.child(URDF_TEMPLATE),
			)
			.child(
				PageElement::new("button")
					.attr("type", "submit")
					.child("Create"),
			);

		PageElement::new("main")
			.child(nav_bar())
			.child(PageElement::new("h1").child("New URDF file"))
			.child(form)
			.into_page()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use urdfhub_core::{Diagnostics, NullRenderer};

	#[rstest]
	fn test_form_contains_escaped_template() {
		let diagnostics = Diagnostics::disabled();
		let ctx = ViewContext {
			path: "/create",
			props: None,
			renderer: &NullRenderer,
			diagnostics: &diagnostics,
			trace: &[],
		};

		let html = CreateFile.render(&ctx).render_to_string();

		assert!(html.contains(r#"name="filename""#));
		assert!(html.contains("&lt;robot name=&quot;new_robot&quot;&gt;"));
		assert!(!html.contains("<robot"));
	}
}
