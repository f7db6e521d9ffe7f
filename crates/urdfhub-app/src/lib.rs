//! Application bootstrap for the urdfhub web client.
//!
//! This crate wires the pieces together: it reads [`Settings`], maps the
//! configured routes onto views from a [`ViewRegistry`], installs the router
//! and mounts the application onto a host element.
//!
//! ## Startup
//!
//! ```ignore
//! use urdfhub_app::{App, MemoryDocument, Settings};
//!
//! let document = MemoryDocument::new().with_element("#app");
//! let app = App::new(Settings::default()).mount(&document)?;
//! assert_eq!(app.current_view().route_name(), Some("Home"));
//! ```
//!
//! Startup fails with a [`BootstrapError`] when the route table is invalid or
//! the host element is missing. Nothing is rendered in that case.
//!
//! In the browser, the `#[wasm_bindgen(start)]` entry point performs the same
//! steps against the live document, binds the three.js renderer when the page
//! has loaded it, and routes link clicks and back/forward moves through the
//! router.

pub mod app;
pub mod document;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod registry;
pub mod settings;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod entry;

pub use app::{App, RunningApp};
#[cfg(target_arch = "wasm32")]
pub use document::BrowserDocument;
pub use document::{HostDocument, HostElement, MemoryDocument, MemoryElement};
pub use error::{BootstrapError, BootstrapResult, SettingsError};
pub use registry::ViewRegistry;
pub use settings::{RouteConfig, Settings};
