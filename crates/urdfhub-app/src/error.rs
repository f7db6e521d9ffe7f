//! Error types for application startup.

use std::path::PathBuf;
use thiserror::Error;
use urdfhub_router::RouterError;

/// Errors raised while loading [`Settings`](crate::settings::Settings).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("Failed to read settings from {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The settings document is not valid TOML or has the wrong shape.
	#[error("Invalid settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Errors that abort [`App::start`](crate::app::App::start).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BootstrapError {
	/// The route table was rejected by the router.
	#[error("Invalid route configuration: {0}")]
	Configuration(#[from] RouterError),

	/// A configured route names a view key the registry does not know.
	#[error("Route '{route}' refers to unknown view '{view}'")]
	UnknownView { route: String, view: String },

	/// The host element was not found in the document.
	#[error("Mount target '{selector}' not found")]
	MountTargetMissing { selector: String },

	#[error(transparent)]
	Settings(#[from] SettingsError),
}

impl BootstrapError {
	/// Returns `true` for faults in the route configuration.
	pub fn is_configuration_fault(&self) -> bool {
		matches!(self, Self::Configuration(_) | Self::UnknownView { .. })
	}
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;
