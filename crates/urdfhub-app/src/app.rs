//! Application bootstrap.
//!
//! [`App`] collects the settings and capabilities, then [`App::start`] builds
//! the route table, installs the [`Router`], attaches to the host element and
//! renders the current view. Every later navigation re-renders the host.
//!
//! ```ignore
//! let document = MemoryDocument::new().with_element("#app");
//! let app = App::new(Settings::default()).start(&document, "#app")?;
//! app.navigate("/browser?dir=meshes")?;
//! ```

use crate::document::{HostDocument, HostElement};
use crate::error::BootstrapError;
use crate::registry::ViewRegistry;
use crate::settings::Settings;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use urdfhub_core::{
	DiagnosticSink, Diagnostics, NullRenderer, SceneRenderer, Severity, ViewContext, ViewRef,
	default_sink,
};
use urdfhub_router::{
	History, NavigationTarget, Resolution, Router, RouterError, SubscriptionId,
};

/// Renders the current resolution into the host element.
struct RouterOutlet {
	host: Rc<dyn HostElement>,
	renderer: Rc<dyn SceneRenderer>,
	diagnostics: Diagnostics,
	not_found: ViewRef,
}

impl RouterOutlet {
	fn render(&self, resolution: &Resolution) {
		let (view, props) = match resolution {
			Resolution::Resolved(resolved) => (&resolved.view, resolved.props.as_ref()),
			Resolution::Unresolved { .. } => (&self.not_found, None),
		};
		let trace = [
			view.name().to_string(),
			"RouterOutlet".to_string(),
			"App".to_string(),
		];
		let ctx = ViewContext {
			path: resolution.path(),
			props,
			renderer: self.renderer.as_ref(),
			diagnostics: &self.diagnostics,
			trace: &trace,
		};

		let page = view.render(&ctx);
		// SAFETY(XSS): render_to_string() HTML-escapes all dynamic text content
		// and attribute values.
		self.host.set_inner_html(&page.render_to_string());
		self.diagnostics.info(
			"RouterOutlet",
			format!("rendered {} for {}", view.name(), resolution.path()),
		);
	}

	fn clear(&self) {
		self.host.set_inner_html("");
	}
}

/// Application builder.
pub struct App {
	settings: Settings,
	views: ViewRegistry,
	sink: Option<Arc<dyn DiagnosticSink>>,
	renderer: Rc<dyn SceneRenderer>,
	history: Option<Box<dyn History>>,
}

impl fmt::Debug for App {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("App")
			.field("settings", &self.settings)
			.field("views", &self.views.len())
			.field("renderer", &self.renderer.backend())
			.field("custom_history", &self.history.is_some())
			.finish()
	}
}

impl App {
	/// Creates an application with the built-in views, the platform's default
	/// diagnostic sink and no 3D renderer.
	pub fn new(settings: Settings) -> Self {
		Self {
			settings,
			views: ViewRegistry::default(),
			sink: None,
			renderer: Rc::new(NullRenderer),
			history: None,
		}
	}

	/// Replaces the view registry.
	pub fn views(mut self, views: ViewRegistry) -> Self {
		self.views = views;
		self
	}

	/// Sends view warnings to `sink` instead of the platform default.
	pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
		self.sink = Some(Arc::new(sink));
		self
	}

	/// Makes a 3D renderer available to views.
	pub fn renderer(mut self, renderer: impl SceneRenderer + 'static) -> Self {
		self.renderer = Rc::new(renderer);
		self
	}

	/// Uses `history` instead of the platform default.
	pub fn history(mut self, history: impl History + 'static) -> Self {
		self.history = Some(Box::new(history));
		self
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Starts on the element selected by `settings.host_selector`.
	pub fn mount(self, document: &dyn HostDocument) -> Result<RunningApp, BootstrapError> {
		let selector = self.settings.host_selector.clone();
		self.start(document, &selector)
	}

	/// Builds the router, attaches to `host_selector` and renders the current
	/// view.
	///
	/// # Errors
	///
	/// - [`BootstrapError::UnknownView`] if a route names an unregistered view
	/// - [`BootstrapError::Configuration`] if the route table is invalid
	/// - [`BootstrapError::MountTargetMissing`] if no element matches
	///   `host_selector`
	///
	/// Nothing is rendered on error.
	pub fn start(
		self,
		document: &dyn HostDocument,
		host_selector: &str,
	) -> Result<RunningApp, BootstrapError> {
		let diagnostics = self.build_diagnostics();
		let Self {
			settings,
			views,
			renderer,
			history,
			..
		} = self;

		let routes = views.build_routes(&settings.routes).inspect_err(|e| {
			tracing::error!(error = %e, "Failed to build route table");
		})?;
		let history = history.unwrap_or_else(|| default_history(&settings));
		let router = Router::register(routes, history).map_err(|e| {
			tracing::error!(error = %e, "Route table rejected");
			BootstrapError::Configuration(e)
		})?;

		let Some(host) = document.query(host_selector) else {
			tracing::error!(selector = host_selector, "Mount target not found");
			return Err(BootstrapError::MountTargetMissing {
				selector: host_selector.to_string(),
			});
		};

		let outlet = Rc::new(RouterOutlet {
			host,
			renderer,
			diagnostics,
			not_found: Arc::clone(views.not_found()),
		});
		outlet.render(router.current_view());

		let router = Rc::new(RefCell::new(router));
		let listener_outlet = Rc::clone(&outlet);
		let subscription = router
			.borrow_mut()
			.subscribe(move |event| listener_outlet.render(&event.resolution));

		tracing::info!(
			selector = host_selector,
			location = %router.borrow().current_location(),
			debug = settings.debug,
			"Application mounted"
		);

		Ok(RunningApp {
			router,
			outlet,
			subscription,
			host_selector: host_selector.to_string(),
		})
	}

	fn build_diagnostics(&self) -> Diagnostics {
		if !self.settings.warn_handler {
			return Diagnostics::disabled();
		}
		let sink = self.sink.clone().unwrap_or_else(default_sink);
		let min_severity = if self.settings.debug {
			Severity::Info
		} else {
			Severity::Warn
		};
		Diagnostics::from_shared(sink).with_min_severity(min_severity)
	}
}

fn default_history(settings: &Settings) -> Box<dyn History> {
	#[cfg(target_arch = "wasm32")]
	{
		let _ = settings;
		Box::new(urdfhub_router::BrowserHistory::new())
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		Box::new(urdfhub_router::MemoryHistory::new(
			settings.initial_location.clone(),
		))
	}
}

/// A mounted application.
///
/// Navigation methods borrow the router mutably for the duration of the
/// call, including the re-render.
pub struct RunningApp {
	router: Rc<RefCell<Router>>,
	outlet: Rc<RouterOutlet>,
	subscription: SubscriptionId,
	host_selector: String,
}

impl fmt::Debug for RunningApp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RunningApp")
			.field("host_selector", &self.host_selector)
			.field("router", &self.router)
			.finish()
	}
}

impl RunningApp {
	/// Shared handle to the router, for event handlers.
	pub fn router(&self) -> Rc<RefCell<Router>> {
		Rc::clone(&self.router)
	}

	pub fn navigate(
		&self,
		target: impl Into<NavigationTarget>,
	) -> Result<Resolution, RouterError> {
		self.router.borrow_mut().navigate(target)
	}

	pub fn replace(
		&self,
		target: impl Into<NavigationTarget>,
	) -> Result<Resolution, RouterError> {
		self.router.borrow_mut().replace(target)
	}

	pub fn back(&self) -> Result<Option<Resolution>, RouterError> {
		self.router.borrow_mut().back()
	}

	pub fn forward(&self) -> Result<Option<Resolution>, RouterError> {
		self.router.borrow_mut().forward()
	}

	/// Replays a location the browser already moved to.
	pub fn sync_location(&self, location: &str) -> Resolution {
		self.router.borrow_mut().sync_location(location)
	}

	pub fn current_view(&self) -> Resolution {
		self.router.borrow().current_view().clone()
	}

	pub fn current_location(&self) -> String {
		self.router.borrow().current_location().to_string()
	}

	/// Current markup of the host element.
	pub fn host_html(&self) -> String {
		self.outlet.host.inner_html()
	}

	pub fn diagnostics(&self) -> &Diagnostics {
		&self.outlet.diagnostics
	}

	pub fn host_selector(&self) -> &str {
		&self.host_selector
	}

	/// Stops re-rendering and clears the host element.
	pub fn unmount(self) {
		let mut router = self.router.borrow_mut();
		router.unsubscribe(self.subscription);
		router.teardown();
		drop(router);
		self.outlet.clear();
		tracing::info!(selector = %self.host_selector, "Application unmounted");
	}
}
