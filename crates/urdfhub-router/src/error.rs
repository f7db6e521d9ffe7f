//! Error types for routing.

use thiserror::Error;

/// Error type for router operations.
///
/// Table validation failures are configuration faults: they are raised while
/// the router is being built and the application must not start with them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RouterError {
	/// Two routes share a path.
	#[error("duplicate route path '{path}' (routes '{first}' and '{second}')")]
	DuplicatePath {
		path: String,
		first: String,
		second: String,
	},

	/// Two routes share a name.
	#[error("duplicate route name '{name}' (paths '{first}' and '{second}')")]
	DuplicateName {
		name: String,
		first: String,
		second: String,
	},

	/// No route is registered for `/`.
	#[error("route table has no root route '/'")]
	MissingRoot,

	/// A route path is not a plain absolute path.
	#[error("invalid path '{path}' for route '{name}': {reason}")]
	InvalidPath {
		name: String,
		path: String,
		reason: &'static str,
	},

	/// A route has an empty name.
	#[error("route '{path}' has an empty name")]
	EmptyName { path: String },

	/// Navigation by name to a route that does not exist.
	#[error("Invalid route name: {0}")]
	UnknownRouteName(String),

	/// The history backend refused the navigation.
	#[error("Navigation failed: {0}")]
	History(#[from] HistoryError),
}

impl RouterError {
	/// Whether this error comes from route table validation.
	pub fn is_configuration_fault(&self) -> bool {
		matches!(
			self,
			Self::DuplicatePath { .. }
				| Self::DuplicateName { .. }
				| Self::MissingRoot
				| Self::InvalidPath { .. }
				| Self::EmptyName { .. }
		)
	}
}

/// Error type for history backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryError {
	/// The host provides no history API (no window, detached document).
	#[error("history unavailable: {0}")]
	Unavailable(String),

	/// The host rejected a state change.
	#[error("history rejected '{location}': {reason}")]
	Rejected { location: String, reason: String },
}
