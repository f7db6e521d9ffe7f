//! Application settings.
//!
//! Settings can be loaded from a TOML document, a TOML file, or built in code.
//! Every field has a default, so an empty document yields the canonical
//! configuration:
//!
//! ```toml
//! host_selector = "#app"
//! debug = false
//! log_filter = "info"
//! warn_handler = true
//!
//! [[routes]]
//! name = "Home"
//! path = "/"
//! view = "home"
//!
//! [[routes]]
//! name = "FileBrowser"
//! path = "/browser"
//! view = "file_browser"
//! props_from_path = true
//!
//! [[routes]]
//! name = "CreateFile"
//! path = "/create"
//! view = "create_file"
//! ```
//!
//! A `routes` array in the document replaces the default table entirely.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables read by [`Settings::apply_env`].
pub const ENV_PREFIX: &str = "URDFHUB_";

/// Top-level application settings.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	/// CSS selector of the element the application mounts onto.
	#[serde(default = "default_host_selector")]
	pub host_selector: String,

	/// Debug mode. Informational diagnostics are forwarded to the sink.
	#[serde(default)]
	pub debug: bool,

	/// `tracing` filter directive used by [`logging::init`](crate::logging).
	#[serde(default = "default_log_filter")]
	pub log_filter: String,

	/// Whether view warnings are forwarded to a sink at all.
	#[serde(default = "default_warn_handler")]
	pub warn_handler: bool,

	/// Location used by the in-memory history on native targets.
	#[serde(default = "default_initial_location")]
	pub initial_location: String,

	/// Route table, in declaration order.
	#[serde(default = "default_routes")]
	pub routes: Vec<RouteConfig>,
}

/// One entry of the configured route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
	/// Unique route name.
	pub name: String,
	/// Unique path, starting with `/`.
	pub path: String,
	/// Key of the view in the [`ViewRegistry`](crate::registry::ViewRegistry).
	pub view: String,
	/// Forward the decoded query string to the view.
	#[serde(default)]
	pub props_from_path: bool,
}

impl RouteConfig {
	pub fn new(
		name: impl Into<String>,
		path: impl Into<String>,
		view: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			view: view.into(),
			props_from_path: false,
		}
	}

	/// Enables forwarding of query-string props.
	pub fn with_props(mut self) -> Self {
		self.props_from_path = true;
		self
	}
}

fn default_host_selector() -> String {
	"#app".to_string()
}

fn default_log_filter() -> String {
	"info".to_string()
}

fn default_warn_handler() -> bool {
	true
}

fn default_initial_location() -> String {
	"/".to_string()
}

fn default_routes() -> Vec<RouteConfig> {
	vec![
		RouteConfig::new("Home", "/", "home"),
		RouteConfig::new("FileBrowser", "/browser", "file_browser").with_props(),
		RouteConfig::new("CreateFile", "/create", "create_file"),
	]
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			host_selector: default_host_selector(),
			debug: false,
			log_filter: default_log_filter(),
			warn_handler: default_warn_handler(),
			initial_location: default_initial_location(),
			routes: default_routes(),
		}
	}
}

impl Settings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a TOML settings file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), routes = settings.routes.len(), "Loaded settings");
		Ok(settings)
	}

	/// Overrides fields from `URDFHUB_*` environment variables.
	///
	/// Recognised variables are `URDFHUB_DEBUG`, `URDFHUB_HOST_SELECTOR` and
	/// `URDFHUB_LOG`.
	pub fn apply_env(self) -> Self {
		self.apply_overrides(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
	}

	fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(debug) = lookup("DEBUG") {
			self.debug = debug.eq_ignore_ascii_case("true") || debug == "1";
		}
		if let Some(selector) = lookup("HOST_SELECTOR") {
			self.host_selector = selector;
		}
		if let Some(filter) = lookup("LOG") {
			self.log_filter = filter;
		}
		self
	}

	/// Sets debug mode.
	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	/// Replaces the route table.
	pub fn with_routes(mut self, routes: Vec<RouteConfig>) -> Self {
		self.routes = routes;
		self
	}

	/// Sets the initial location of the in-memory history.
	pub fn with_initial_location(mut self, location: impl Into<String>) -> Self {
		self.initial_location = location.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;
	use std::io::Write;

	#[rstest]
	fn test_empty_document_yields_defaults() {
		let settings = Settings::from_toml_str("").unwrap();

		assert_eq!(settings, Settings::default());
		assert_eq!(settings.host_selector, "#app");
		assert!(!settings.debug);
		assert!(settings.warn_handler);
		assert_eq!(settings.routes.len(), 3);
	}

	#[rstest]
	fn test_default_routes_are_canonical() {
		let routes = Settings::default().routes;

		let summary: Vec<_> = routes
			.iter()
			.map(|r| (r.name.as_str(), r.path.as_str(), r.props_from_path))
			.collect();
		assert_eq!(
			summary,
			vec![
				("Home", "/", false),
				("FileBrowser", "/browser", true),
				("CreateFile", "/create", false),
			]
		);
	}

	#[rstest]
	fn test_partial_document_keeps_other_defaults() {
		let settings = Settings::from_toml_str(
			r##"
host_selector = "#root"
debug = true
"##,
		)
		.unwrap();

		assert_eq!(settings.host_selector, "#root");
		assert!(settings.debug);
		assert_eq!(settings.log_filter, "info");
		assert_eq!(settings.routes, Settings::default().routes);
	}

	#[rstest]
	fn test_routes_array_replaces_default_table() {
		let settings = Settings::from_toml_str(
			r#"
[[routes]]
name = "Home"
path = "/"
view = "home"

[[routes]]
name = "Viewer"
path = "/viewer"
view = "file_browser"
props_from_path = true
"#,
		)
		.unwrap();

		assert_eq!(
			settings.routes,
			vec![
				RouteConfig::new("Home", "/", "home"),
				RouteConfig::new("Viewer", "/viewer", "file_browser").with_props(),
			]
		);
	}

	#[rstest]
	#[case("debug = \"yes\"")]
	#[case("[[routes]]\nname = \"Home\"")]
	#[case("host_selector = ")]
	fn test_invalid_documents_fail_to_parse(#[case] source: &str) {
		let result = Settings::from_toml_str(source);

		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_from_path_reads_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "log_filter = \"urdfhub=debug\"").unwrap();

		// Act
		let settings = Settings::from_path(file.path()).unwrap();

		// Assert
		assert_eq!(settings.log_filter, "urdfhub=debug");
	}

	#[rstest]
	fn test_from_path_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.toml");

		let result = Settings::from_path(&path);

		assert!(matches!(result, Err(SettingsError::Io { path: p, .. }) if p == path));
	}

	#[rstest]
	#[case("true", true)]
	#[case("1", true)]
	#[case("TRUE", true)]
	#[case("false", false)]
	#[case("0", false)]
	fn test_debug_override(#[case] value: &str, #[case] expected: bool) {
		let vars = HashMap::from([("DEBUG", value.to_string())]);

		let settings = Settings::default().apply_overrides(|key| vars.get(key).cloned());

		assert_eq!(settings.debug, expected);
	}

	#[rstest]
	fn test_overrides_leave_unset_fields() {
		let vars = HashMap::from([("HOST_SELECTOR", "#viewer".to_string())]);

		let settings = Settings::default().apply_overrides(|key| vars.get(key).cloned());

		assert_eq!(settings.host_selector, "#viewer");
		assert_eq!(settings.log_filter, "info");
		assert!(!settings.debug);
	}
}
