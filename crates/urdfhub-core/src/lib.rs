//! Core types shared by the urdfhub crates.
//!
//! - [`page`]: the renderable view tree returned by views
//! - [`view`]: the [`View`](view::View) trait and the context views render with
//! - [`diagnostics`]: the non-fatal warning schema and its sinks
//! - [`renderer`]: the 3D scene renderer capability injected into views

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod diagnostics;
pub mod page;
pub mod renderer;
pub mod view;

pub use diagnostics::{
	DiagnosticSink, Diagnostics, MemorySink, Severity, TracingSink, Warning, default_sink,
};
pub use page::{IntoPage, Page, PageElement};
pub use renderer::{NullRenderer, RendererError, SceneRenderer};
pub use view::{FnView, RouteProps, View, ViewContext, ViewRef, view_fn};

#[cfg(target_arch = "wasm32")]
pub use diagnostics::ConsoleSink;
#[cfg(target_arch = "wasm32")]
pub use renderer::ThreeRenderer;
