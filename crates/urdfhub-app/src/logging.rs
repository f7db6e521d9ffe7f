//! Logging setup for native builds.
//!
//! In the browser, diagnostics go to the console through
//! `ConsoleSink` and no subscriber is installed.

use crate::settings::Settings;
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` if a
/// global subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.try_init()
		.is_ok()
}

/// Installs a subscriber using [`Settings::log_filter`].
pub fn init_from_settings(settings: &Settings) -> bool {
	init(&settings.log_filter)
}
