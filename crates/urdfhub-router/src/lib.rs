//! Client-side routing for urdfhub.
//!
//! This crate maps URL paths to page views and tracks where the application
//! currently is:
//!
//! - [`Route`] / [`RouteTable`]: the static, validated route declarations
//! - [`Router`]: resolution, navigation and the current navigation state
//! - [`History`]: the back/forward backend ([`MemoryHistory`] natively,
//!   `BrowserHistory` on wasm32)
//!
//! ## Example
//!
//! ```ignore
//! use urdfhub_core::{Page, view_fn};
//! use urdfhub_router::{MemoryHistory, NavigationTarget, Route, Router};
//!
//! let home = view_fn("Home", |_| Page::text("home"));
//! let browser = view_fn("FileBrowser", |_| Page::text("files"));
//!
//! let mut router = Router::register(
//!     vec![
//!         Route::new("Home", "/", home),
//!         Route::new("FileBrowser", "/browser", browser).with_props(),
//!     ],
//!     MemoryHistory::new("/"),
//! )?;
//!
//! router.navigate(NavigationTarget::name("FileBrowser"))?;
//! assert_eq!(router.current_view().route_name(), Some("FileBrowser"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod history;
pub mod location;
pub mod route;
pub mod router;

pub use error::{HistoryError, RouterError};
pub use history::{History, MemoryHistory, NavigationType};
pub use location::Location;
pub use route::{Route, RouteTable};
pub use router::{
	NavigationEvent, NavigationTarget, Resolution, ResolvedView, Router, SubscriptionId,
};

#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
