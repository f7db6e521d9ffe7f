//! File browser view.
//!
//! Reads its state from forwarded props:
//!
//! | Prop | Meaning | Default |
//! |------|---------|---------|
//! | `dir` | directory being browsed | `/` |
//! | `page` | 1-based listing page | `1` |
//! | `q` | name filter | none |
//! | `file` | `.urdf` file to preview | none |

use super::nav_bar;
use urdfhub_core::{IntoPage, Page, PageElement, View, ViewContext};

/// Props understood by [`FileBrowser`].
pub const KNOWN_PROPS: &[&str] = &["dir", "page", "q", "file"];

/// Entries shown per listing page.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileBrowser;

impl FileBrowser {
	fn directory(&self, ctx: &ViewContext<'_>) -> String {
		match ctx.prop("dir") {
			None | Some("") => "/".to_string(),
			Some(dir) if dir.starts_with('/') => dir.to_string(),
			Some(dir) => format!("/{dir}"),
		}
	}

	fn page_number(&self, ctx: &ViewContext<'_>) -> usize {
		match ctx.prop("page") {
			None => 1,
			Some(raw) => match raw.parse::<usize>() {
				Ok(page) if page >= 1 && page.checked_mul(PAGE_SIZE).is_some() => page,
				_ => {
					ctx.warn(self, format!("invalid page '{raw}', showing page 1"));
					1
				}
			},
		}
	}

	fn preview(&self, ctx: &ViewContext<'_>) -> Option<PageElement> {
		let file = ctx.prop("file")?;
		if !file.to_ascii_lowercase().ends_with(".urdf") {
			ctx.warn(self, format!("'{file}' is not a URDF file, preview skipped"));
			return None;
		}

		let viewer = PageElement::new("div")
			.attr("id", "urdf-viewer")
			.attr("data-file", file.to_string())
			.attr("data-backend", ctx.renderer.backend().to_string());
		if ctx.renderer.is_available() {
			Some(viewer)
		} else {
			Some(viewer.child("3D preview unavailable"))
		}
	}
}

/// Builds `/browser?dir=...` for a directory.
fn browse_href(dir: &str) -> String {
	match serde_urlencoded::to_string([("dir", dir)]) {
		Ok(query) => format!("/browser?{query}"),
		Err(_) => "/browser".to_string(),
	}
}

/// Breadcrumb links from the root to `dir`.
fn breadcrumbs(dir: &str) -> PageElement {
	let mut crumbs = vec![
		PageElement::new("a")
			.attr("href", browse_href("/"))
			.child("root"),
	];
	let mut current = String::new();
	for segment in dir.split('/').filter(|s| !s.is_empty()) {
		current.push('/');
		current.push_str(segment);
		crumbs.push(
			PageElement::new("a")
				.attr("href", browse_href(&current))
				.child(segment.to_string()),
		);
	}
	PageElement::new("ol")
		.attr("class", "breadcrumbs")
		.children(crumbs.into_iter().map(|a| PageElement::new("li").child(a)))
}

impl View for FileBrowser {
	fn name(&self) -> &str {
		"FileBrowser"
	}

	fn render(&self, ctx: &ViewContext<'_>) -> Page {
		if let Some(props) = ctx.props {
			for (key, _) in props.iter() {
				if !KNOWN_PROPS.contains(&key) {
					ctx.warn(self, format!("ignoring unknown prop '{key}'"));
				}
			}
		}

		let dir = self.directory(ctx);
		let page = self.page_number(ctx);
		let first = (page - 1) * PAGE_SIZE + 1;

		let mut summary = format!(
			"Browsing {dir}, page {page} (entries {first}-{})",
			page * PAGE_SIZE
		);
		if let Some(filter) = ctx.prop("q").filter(|q| !q.is_empty()) {
			summary.push_str(&format!(", matching '{filter}'"));
		}

		PageElement::new("main")
			.attr("class", "urdfhub-browser")
			.attr("data-dir", dir.clone())
			.child(nav_bar())
			.child(PageElement::new("h1").child("Files"))
			.child(breadcrumbs(&dir))
			.child(PageElement::new("p").attr("class", "summary").child(summary))
			.child(self.preview(ctx))
			.into_page()
	}
}
