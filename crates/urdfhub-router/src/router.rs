//! Core Router implementation.
//!
//! The [`Router`] owns the validated [`RouteTable`], a [`History`] backend and
//! the navigation state (current location and its [`Resolution`]). Every
//! state change is reported to subscribed listeners as a [`NavigationEvent`].

use crate::error::RouterError;
use crate::history::{History, NavigationType};
use crate::location::Location;
use crate::route::{Route, RouteTable};
use std::fmt;
use std::sync::Arc;
use urdfhub_core::{RouteProps, ViewRef};

/// A route matched for a requested location.
#[derive(Debug, Clone)]
pub struct ResolvedView {
	/// Name of the matched route.
	pub name: String,
	/// Path component that matched.
	pub path: String,
	/// The view to render.
	pub view: ViewRef,
	/// Forwarded props, `Some` only for routes with `props_from_path`.
	pub props: Option<RouteProps>,
}

impl PartialEq for ResolvedView {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.path == other.path
			&& self.props == other.props
			&& std::ptr::addr_eq(Arc::as_ptr(&self.view), Arc::as_ptr(&other.view))
	}
}

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
	/// A route matched.
	Resolved(ResolvedView),
	/// No route matched the path.
	Unresolved {
		/// The path that failed to match.
		path: String,
	},
}

impl Resolution {
	pub fn is_resolved(&self) -> bool {
		matches!(self, Self::Resolved(_))
	}

	/// Returns the matched view, if any.
	pub fn resolved(&self) -> Option<&ResolvedView> {
		match self {
			Self::Resolved(view) => Some(view),
			Self::Unresolved { .. } => None,
		}
	}

	/// Returns the matched route name, if any.
	pub fn route_name(&self) -> Option<&str> {
		self.resolved().map(|v| v.name.as_str())
	}

	/// Returns the requested path, matched or not.
	pub fn path(&self) -> &str {
		match self {
			Self::Resolved(view) => &view.path,
			Self::Unresolved { path } => path,
		}
	}

	/// Returns forwarded props, if the matched route forwards them.
	pub fn props(&self) -> Option<&RouteProps> {
		self.resolved().and_then(|v| v.props.as_ref())
	}
}

/// Where to navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
	/// A route name.
	Name(String),
	/// A location string (path with optional query and fragment).
	Path(String),
}

impl NavigationTarget {
	pub fn name(name: impl Into<String>) -> Self {
		Self::Name(name.into())
	}

	pub fn path(path: impl Into<String>) -> Self {
		Self::Path(path.into())
	}
}

impl From<&str> for NavigationTarget {
	fn from(path: &str) -> Self {
		Self::Path(path.to_string())
	}
}

impl From<String> for NavigationTarget {
	fn from(path: String) -> Self {
		Self::Path(path)
	}
}

/// A change of navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEvent {
	pub kind: NavigationType,
	/// Location before the change.
	pub from: String,
	/// Location after the change.
	pub to: String,
	/// Resolution of `to`.
	pub resolution: Resolution,
}

/// Handle returned by [`Router::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&NavigationEvent)>;

/// The current location and what it resolved to.
#[derive(Debug, Clone)]
struct NavigationState {
	location: Location,
	resolution: Resolution,
}

/// The client-side router.
pub struct Router {
	table: RouteTable,
	history: Box<dyn History>,
	state: NavigationState,
	listeners: Vec<(SubscriptionId, Listener)>,
	next_subscription: u64,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.table.len())
			.field("location", &self.state.location.to_string())
			.field("route_name", &self.state.resolution.route_name())
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

impl Router {
	/// Validates `routes` and builds a router on top of `history`.
	///
	/// # Errors
	///
	/// Returns a configuration fault (see
	/// [`RouterError::is_configuration_fault`]) if the table is invalid. No
	/// router is produced in that case.
	pub fn register(
		routes: Vec<Route>,
		history: impl History + 'static,
	) -> Result<Self, RouterError> {
		let table = RouteTable::new(routes)?;
		Ok(Self::new(table, history))
	}

	/// Builds a router from an already validated table.
	///
	/// The initial navigation state is the resolution of the history's current
	/// location, falling back to `/` when the backend cannot report one.
	pub fn new(table: RouteTable, history: impl History + 'static) -> Self {
		let initial = history.location().unwrap_or_else(|e| {
			tracing::warn!("Failed to read initial location, using '/': {}", e);
			"/".to_string()
		});
		let location = Location::parse(&initial);
		let resolution = resolve_in(&table, &location);

		tracing::info!(
			routes = table.len(),
			location = %location,
			route = resolution.route_name().unwrap_or("<unresolved>"),
			"Router initialised"
		);

		Self {
			table,
			history: Box::new(history),
			state: NavigationState {
				location,
				resolution,
			},
			listeners: Vec::new(),
			next_subscription: 0,
		}
	}

	/// Resolves a location against the table.
	///
	/// Only the path component takes part in matching, and only exact matches
	/// count. This never fails and never touches navigation state.
	pub fn resolve(&self, location: &str) -> Resolution {
		resolve_in(&self.table, &Location::parse(location))
	}

	/// Navigates to `target`, pushing a history entry.
	///
	/// Navigating to the current location is a no-op. A path that matches no
	/// route still becomes the current location, with an
	/// [`Resolution::Unresolved`] state.
	///
	/// # Errors
	///
	/// - [`RouterError::UnknownRouteName`] if `target` names no route
	/// - [`RouterError::History`] if the backend refuses the entry
	///
	/// Navigation state is unchanged on error.
	pub fn navigate(
		&mut self,
		target: impl Into<NavigationTarget>,
	) -> Result<Resolution, RouterError> {
		self.transition(target.into(), NavigationType::Push)
	}

	/// Navigates to `target`, replacing the current history entry.
	pub fn replace(
		&mut self,
		target: impl Into<NavigationTarget>,
	) -> Result<Resolution, RouterError> {
		self.transition(target.into(), NavigationType::Replace)
	}

	/// Steps back in history.
	///
	/// Returns the new resolution when the backend moved synchronously, `None`
	/// when there was nothing to go back to or the move will arrive later as a
	/// popstate.
	pub fn back(&mut self) -> Result<Option<Resolution>, RouterError> {
		let location = self.history.back()?;
		Ok(location.map(|location| self.sync_location(&location)))
	}

	/// Steps forward in history. See [`Router::back`].
	pub fn forward(&mut self) -> Result<Option<Resolution>, RouterError> {
		let location = self.history.forward()?;
		Ok(location.map(|location| self.sync_location(&location)))
	}

	/// Replays a location the host has already moved to, such as a popstate.
	///
	/// History is not touched.
	pub fn sync_location(&mut self, location: &str) -> Resolution {
		let location = Location::parse(location);
		if location == self.state.location {
			return self.state.resolution.clone();
		}
		let resolution = resolve_in(&self.table, &location);
		self.commit(location, resolution, NavigationType::Pop)
	}

	/// Returns the current resolution.
	pub fn current_view(&self) -> &Resolution {
		&self.state.resolution
	}

	/// Returns the current location.
	pub fn current_location(&self) -> &Location {
		&self.state.location
	}

	/// Returns the path of the route called `name`.
	pub fn reverse(&self, name: &str) -> Result<String, RouterError> {
		self.table
			.find_by_name(name)
			.map(|route| route.path().to_string())
			.ok_or_else(|| RouterError::UnknownRouteName(name.to_string()))
	}

	/// Returns the route called `name`.
	pub fn route(&self, name: &str) -> Option<&Route> {
		self.table.find_by_name(name)
	}

	pub fn routes(&self) -> &RouteTable {
		&self.table
	}

	pub fn route_count(&self) -> usize {
		self.table.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.table.find_by_name(name).is_some()
	}

	/// Number of entries in the history backend.
	pub fn history_len(&self) -> usize {
		self.history.len()
	}

	/// Registers a listener called after every navigation state change.
	///
	/// Listeners run in registration order. They receive the event by value
	/// and cannot reach back into the router while it is being updated.
	pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
	where
		F: Fn(&NavigationEvent) + 'static,
	{
		let id = SubscriptionId(self.next_subscription);
		self.next_subscription += 1;
		self.listeners.push((id, Box::new(listener)));
		id
	}

	/// Removes a listener. Returns whether it was registered.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(listener_id, _)| *listener_id != id);
		self.listeners.len() != before
	}

	/// Drops every listener.
	pub fn teardown(&mut self) {
		tracing::debug!(listeners = self.listeners.len(), "Router torn down");
		self.listeners.clear();
	}

	fn transition(
		&mut self,
		target: NavigationTarget,
		kind: NavigationType,
	) -> Result<Resolution, RouterError> {
		let location = match target {
			NavigationTarget::Name(name) => Location::parse(&self.reverse(&name)?),
			NavigationTarget::Path(path) => Location::parse(&path),
		};

		if location == self.state.location {
			tracing::debug!(location = %location, "Navigation to current location ignored");
			return Ok(self.state.resolution.clone());
		}

		let resolution = resolve_in(&self.table, &location);
		let target = location.to_string();
		match kind {
			NavigationType::Push => self.history.push(&target)?,
			NavigationType::Replace => self.history.replace(&target)?,
			NavigationType::Pop => {}
		}

		if !resolution.is_resolved() {
			tracing::warn!(location = %location, "No route matches '{}'", location.path());
		}

		Ok(self.commit(location, resolution, kind))
	}

	fn commit(
		&mut self,
		location: Location,
		resolution: Resolution,
		kind: NavigationType,
	) -> Resolution {
		let previous = std::mem::replace(
			&mut self.state,
			NavigationState {
				location,
				resolution,
			},
		);

		let event = NavigationEvent {
			kind,
			from: previous.location.to_string(),
			to: self.state.location.to_string(),
			resolution: self.state.resolution.clone(),
		};
		tracing::info!(
			kind = ?event.kind,
			from = %event.from,
			to = %event.to,
			"Navigated"
		);

		for (_, listener) in &self.listeners {
			listener(&event);
		}

		event.resolution
	}
}

fn resolve_in(table: &RouteTable, location: &Location) -> Resolution {
	match table.find_by_path(location.path()) {
		Some(route) => {
			tracing::debug!(path = location.path(), route = route.name(), "Resolved");
			Resolution::Resolved(ResolvedView {
				name: route.name().to_string(),
				path: location.path().to_string(),
				view: Arc::clone(route.view()),
				props: route.forwards_props().then(|| location.props()),
			})
		}
		None => {
			tracing::debug!(path = location.path(), "Unresolved");
			Resolution::Unresolved {
				path: location.path().to_string(),
			}
		}
	}
}
