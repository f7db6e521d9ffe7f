//! # urdfhub
//!
//! Browser client for browsing, previewing and creating URDF robot
//! description files.
//!
//! The client is a single application instance mounted onto a host element.
//! A client-side router maps locations to page views, a diagnostic hook
//! forwards non-fatal view warnings to a log sink, and a 3D renderer
//! capability is handed to views that preview models.
//!
//! ## Crates
//!
//! - [`core`] - `Page` view tree, the `View` trait, diagnostics and the
//!   renderer capability
//! - [`router`] - route table, navigation state and history backends
//! - [`app`] - settings, bootstrap, built-in views and the WASM entry point
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use urdfhub::prelude::*;
//!
//! let document = MemoryDocument::new().with_element("#app");
//! let app = App::new(Settings::default()).mount(&document)?;
//!
//! app.navigate("/browser?dir=meshes")?;
//! assert_eq!(app.current_view().route_name(), Some("FileBrowser"));
//!
//! app.navigate(NavigationTarget::name("CreateFile"))?;
//! assert!(app.host_html().contains("New URDF file"));
//! ```

pub use urdfhub_app as app;
pub use urdfhub_core as core;
pub use urdfhub_router as router;

pub mod prelude {
	//! Commonly used types.

	pub use urdfhub_app::{
		App, BootstrapError, HostDocument, HostElement, MemoryDocument, RouteConfig, RunningApp,
		Settings, ViewRegistry,
	};
	pub use urdfhub_core::{
		DiagnosticSink, Diagnostics, IntoPage, MemorySink, NullRenderer, Page, PageElement,
		RouteProps, SceneRenderer, Severity, View, ViewContext, ViewRef, Warning, view_fn,
	};
	pub use urdfhub_router::{
		History, MemoryHistory, NavigationTarget, Resolution, Route, RouteTable, Router,
		RouterError,
	};
}
