//! Non-fatal diagnostics raised while rendering.
//!
//! Views report problems through a [`Diagnostics`] handle they receive in
//! their render context. The handle forwards each [`Warning`] to a
//! [`DiagnosticSink`]; reporting never fails and never interrupts rendering.
//!
//! | Sink | Target | Destination |
//! |------|--------|-------------|
//! | [`TracingSink`] | native | `tracing` events |
//! | `ConsoleSink` | wasm32 | `console.warn` / `console.error` |
//! | [`MemorySink`] | any | in-memory buffer (tests) |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a diagnostic.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Info,
	#[default]
	Warn,
	Error,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Info => write!(f, "info"),
			Self::Warn => write!(f, "warn"),
			Self::Error => write!(f, "error"),
		}
	}
}

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
	pub severity: Severity,
	/// Name of the component that raised the warning.
	pub source: String,
	pub message: String,
	/// Component trace, innermost first.
	pub trace: Vec<String>,
}

impl Warning {
	/// Creates a warning with [`Severity::Warn`] and an empty trace.
	pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Warn,
			source: source.into(),
			message: message.into(),
			trace: Vec::new(),
		}
	}

	pub fn with_severity(mut self, severity: Severity) -> Self {
		self.severity = severity;
		self
	}

	/// Appends a frame to the component trace.
	pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
		self.trace.push(frame.into());
		self
	}

	/// Appends several trace frames, innermost first.
	pub fn with_trace(mut self, frames: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.trace.extend(frames.into_iter().map(Into::into));
		self
	}
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"[urdfhub {}]: {} (in <{}>)",
			self.severity, self.message, self.source
		)?;
		for frame in &self.trace {
			write!(f, "\n  at <{}>", frame)?;
		}
		Ok(())
	}
}

/// Destination for diagnostics.
pub trait DiagnosticSink: Send + Sync {
	fn report(&self, warning: &Warning);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&self, warning: &Warning) {
		let trace = warning.trace.join(" < ");
		match warning.severity {
			Severity::Info => tracing::info!(
				source = %warning.source,
				trace = %trace,
				"{}",
				warning.message
			),
			Severity::Warn => tracing::warn!(
				source = %warning.source,
				trace = %trace,
				"{}",
				warning.message
			),
			Severity::Error => tracing::error!(
				source = %warning.source,
				trace = %trace,
				"{}",
				warning.message
			),
		}
	}
}

/// Forwards diagnostics to the browser console.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

#[cfg(target_arch = "wasm32")]
impl DiagnosticSink for ConsoleSink {
	fn report(&self, warning: &Warning) {
		let line = wasm_bindgen::JsValue::from_str(&warning.to_string());
		match warning.severity {
			Severity::Info => web_sys::console::info_1(&line),
			Severity::Warn => web_sys::console::warn_1(&line),
			Severity::Error => web_sys::console::error_1(&line),
		}
	}
}

/// Records diagnostics in memory.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	records: Arc<Mutex<Vec<Warning>>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a copy of the recorded warnings.
	pub fn warnings(&self) -> Vec<Warning> {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	pub fn clear(&self) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clear();
	}
}

impl DiagnosticSink for MemorySink {
	fn report(&self, warning: &Warning) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(warning.clone());
	}
}

/// Returns the sink appropriate for the compilation target.
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
	#[cfg(target_arch = "wasm32")]
	{
		Arc::new(ConsoleSink)
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		Arc::new(TracingSink)
	}
}

/// Handle through which views raise warnings.
///
/// Messages below the minimum severity ([`Severity::Warn`] unless changed)
/// are dropped before they reach the sink.
#[derive(Clone)]
pub struct Diagnostics {
	sink: Option<Arc<dyn DiagnosticSink>>,
	min_severity: Severity,
}

impl fmt::Debug for Diagnostics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Diagnostics")
			.field("enabled", &self.is_enabled())
			.field("min_severity", &self.min_severity)
			.finish()
	}
}

impl Default for Diagnostics {
	fn default() -> Self {
		Self::from_shared(default_sink())
	}
}

impl Diagnostics {
	/// Creates a handle that reports to `sink`.
	pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
		Self::from_shared(Arc::new(sink))
	}

	pub fn from_shared(sink: Arc<dyn DiagnosticSink>) -> Self {
		Self {
			sink: Some(sink),
			min_severity: Severity::Warn,
		}
	}

	/// Creates a handle that discards everything.
	pub fn disabled() -> Self {
		Self {
			sink: None,
			min_severity: Severity::Warn,
		}
	}

	/// Sets the lowest severity that is forwarded.
	pub fn with_min_severity(mut self, severity: Severity) -> Self {
		self.min_severity = severity;
		self
	}

	pub fn min_severity(&self) -> Severity {
		self.min_severity
	}

	pub fn is_enabled(&self) -> bool {
		self.sink.is_some()
	}

	pub fn report(&self, warning: Warning) {
		if warning.severity < self.min_severity {
			return;
		}
		if let Some(sink) = &self.sink {
			sink.report(&warning);
		}
	}

	/// Reports a [`Severity::Info`] message from `source`.
	pub fn info(&self, source: &str, message: impl Into<String>) {
		self.report(Warning::new(source, message).with_severity(Severity::Info));
	}

	/// Reports a [`Severity::Warn`] message from `source`.
	pub fn warn(&self, source: &str, message: impl Into<String>) {
		self.report(Warning::new(source, message));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_warning_display_includes_trace() {
		let warning = Warning::new("FileBrowser", "unknown sort key")
			.with_frame("FileList")
			.with_frame("App");

		assert_eq!(
			warning.to_string(),
			"[urdfhub warn]: unknown sort key (in <FileBrowser>)\n  at <FileList>\n  at <App>"
		);
	}

	#[rstest]
	fn test_memory_sink_clones_share_buffer() {
		let sink = MemorySink::new();
		let diagnostics = Diagnostics::new(sink.clone());

		diagnostics.warn("Home", "first");
		diagnostics.report(Warning::new("Home", "second").with_severity(Severity::Error));

		let warnings = sink.warnings();
		assert_eq!(warnings.len(), 2);
		assert_eq!(warnings[1].severity, Severity::Error);

		sink.clear();
		assert!(sink.warnings().is_empty());
	}

	#[rstest]
	#[case(Severity::Warn, 1)]
	#[case(Severity::Info, 2)]
	#[case(Severity::Error, 0)]
	fn test_min_severity_filters(#[case] min: Severity, #[case] expected: usize) {
		let sink = MemorySink::new();
		let diagnostics = Diagnostics::new(sink.clone()).with_min_severity(min);

		diagnostics.info("RouterOutlet", "rendered Home");
		diagnostics.warn("Home", "slow render");

		assert_eq!(sink.warnings().len(), expected);
	}

	#[rstest]
	fn test_disabled_handle_drops_warnings() {
		let diagnostics = Diagnostics::disabled();

		diagnostics.warn("Home", "ignored");

		assert!(!diagnostics.is_enabled());
	}

	#[rstest]
	fn test_tracing_sink_emits_warn_event() {
		use std::sync::{Arc, Mutex};
		use tracing_subscriber::layer::SubscriberExt as _;
		use tracing_subscriber::util::SubscriberInitExt as _;

		// Arrange
		struct LevelCapture {
			levels: Arc<Mutex<Vec<tracing::Level>>>,
		}

		impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelCapture {
			fn on_event(
				&self,
				event: &tracing::Event<'_>,
				_ctx: tracing_subscriber::layer::Context<'_, S>,
			) {
				self.levels.lock().unwrap().push(*event.metadata().level());
			}
		}

		let levels = Arc::new(Mutex::new(Vec::new()));
		let _guard = tracing_subscriber::registry()
			.with(LevelCapture {
				levels: levels.clone(),
			})
			.set_default();

		// Act
		TracingSink.report(&Warning::new("CreateFile", "empty name"));
		TracingSink.report(&Warning::new("CreateFile", "boom").with_severity(Severity::Error));

		// Assert
		let captured = levels.lock().unwrap();
		assert_eq!(*captured, vec![tracing::Level::WARN, tracing::Level::ERROR]);
	}
}
