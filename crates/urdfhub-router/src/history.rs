//! History backends.
//!
//! The router records every navigation in a [`History`] so that back and
//! forward work without reloading the page. Natively (and in tests) the
//! backend is a [`MemoryHistory`]; in the browser it is `BrowserHistory`,
//! which wraps `window.history`.

use crate::error::HistoryError;

/// How a navigation reached the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationType {
	/// A new entry was pushed.
	Push,
	/// The current entry was replaced.
	Replace,
	/// An existing entry was revisited (back, forward or popstate).
	Pop,
}

/// A navigation history.
pub trait History {
	/// Returns the current location (path, query and fragment).
	fn location(&self) -> Result<String, HistoryError>;

	/// Pushes a new entry, discarding any forward entries.
	fn push(&mut self, location: &str) -> Result<(), HistoryError>;

	/// Replaces the current entry.
	fn replace(&mut self, location: &str) -> Result<(), HistoryError>;

	/// Moves one entry back.
	///
	/// Returns the new location when it is known synchronously, `None` when
	/// there is no earlier entry or the host reports the move later through a
	/// popstate event.
	fn back(&mut self) -> Result<Option<String>, HistoryError>;

	/// Moves one entry forward. See [`History::back`].
	fn forward(&mut self) -> Result<Option<String>, HistoryError>;

	/// Number of entries.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<H: History + ?Sized> History for Box<H> {
	fn location(&self) -> Result<String, HistoryError> {
		(**self).location()
	}

	fn push(&mut self, location: &str) -> Result<(), HistoryError> {
		(**self).push(location)
	}

	fn replace(&mut self, location: &str) -> Result<(), HistoryError> {
		(**self).replace(location)
	}

	fn back(&mut self) -> Result<Option<String>, HistoryError> {
		(**self).back()
	}

	fn forward(&mut self) -> Result<Option<String>, HistoryError> {
		(**self).forward()
	}

	fn len(&self) -> usize {
		(**self).len()
	}
}

/// In-memory history with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
	entries: Vec<String>,
	index: usize,
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl MemoryHistory {
	/// Creates a history holding a single entry.
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			entries: vec![initial.into()],
			index: 0,
		}
	}

	/// Returns all entries, oldest first.
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn can_go_back(&self) -> bool {
		self.index > 0
	}

	pub fn can_go_forward(&self) -> bool {
		self.index + 1 < self.entries.len()
	}
}

impl History for MemoryHistory {
	fn location(&self) -> Result<String, HistoryError> {
		self.entries
			.get(self.index)
			.cloned()
			.ok_or_else(|| HistoryError::Unavailable("history is empty".to_string()))
	}

	fn push(&mut self, location: &str) -> Result<(), HistoryError> {
		self.entries.truncate(self.index + 1);
		self.entries.push(location.to_string());
		self.index = self.entries.len() - 1;
		Ok(())
	}

	fn replace(&mut self, location: &str) -> Result<(), HistoryError> {
		match self.entries.get_mut(self.index) {
			Some(entry) => {
				*entry = location.to_string();
				Ok(())
			}
			None => Err(HistoryError::Unavailable("history is empty".to_string())),
		}
	}

	fn back(&mut self) -> Result<Option<String>, HistoryError> {
		if !self.can_go_back() {
			return Ok(None);
		}
		self.index -= 1;
		self.location().map(Some)
	}

	fn forward(&mut self) -> Result<Option<String>, HistoryError> {
		if !self.can_go_forward() {
			return Ok(None);
		}
		self.index += 1;
		self.location().map(Some)
	}

	fn len(&self) -> usize {
		self.entries.len()
	}
}

/// `window.history` backed history.
///
/// `back` and `forward` only ask the browser to move. The browser reports the
/// new location through a `popstate` event, which the application replays
/// with [`Router::sync_location`](crate::Router::sync_location).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
	pub fn new() -> Self {
		Self
	}

	fn window() -> Result<web_sys::Window, HistoryError> {
		web_sys::window().ok_or_else(|| HistoryError::Unavailable("no window".to_string()))
	}

	fn history() -> Result<web_sys::History, HistoryError> {
		Self::window()?
			.history()
			.map_err(|e| HistoryError::Unavailable(format!("{:?}", e)))
	}
}

#[cfg(target_arch = "wasm32")]
impl History for BrowserHistory {
	fn location(&self) -> Result<String, HistoryError> {
		let location = Self::window()?.location();
		let unavailable = |e: wasm_bindgen::JsValue| HistoryError::Unavailable(format!("{:?}", e));

		let mut current = location.pathname().map_err(unavailable)?;
		current.push_str(&location.search().map_err(unavailable)?);
		current.push_str(&location.hash().map_err(unavailable)?);
		Ok(current)
	}

	fn push(&mut self, location: &str) -> Result<(), HistoryError> {
		Self::history()?
			.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(location))
			.map_err(|e| HistoryError::Rejected {
				location: location.to_string(),
				reason: format!("{:?}", e),
			})
	}

	fn replace(&mut self, location: &str) -> Result<(), HistoryError> {
		Self::history()?
			.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(location))
			.map_err(|e| HistoryError::Rejected {
				location: location.to_string(),
				reason: format!("{:?}", e),
			})
	}

	fn back(&mut self) -> Result<Option<String>, HistoryError> {
		Self::history()?
			.back()
			.map_err(|e| HistoryError::Unavailable(format!("{:?}", e)))?;
		Ok(None)
	}

	fn forward(&mut self) -> Result<Option<String>, HistoryError> {
		Self::history()?
			.forward()
			.map_err(|e| HistoryError::Unavailable(format!("{:?}", e)))?;
		Ok(None)
	}

	fn len(&self) -> usize {
		Self::history()
			.ok()
			.and_then(|h| h.length().ok())
			.unwrap_or(0) as usize
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_memory_history_push_and_back() {
		let mut history = MemoryHistory::new("/");

		history.push("/browser").unwrap();
		history.push("/create").unwrap();

		assert_eq!(history.len(), 3);
		assert_eq!(history.location().unwrap(), "/create");
		assert_eq!(history.back().unwrap(), Some("/browser".to_string()));
		assert_eq!(history.back().unwrap(), Some("/".to_string()));
		assert_eq!(history.back().unwrap(), None);
		assert_eq!(history.index(), 0);
	}

	#[rstest]
	fn test_memory_history_push_truncates_forward_entries() {
		let mut history = MemoryHistory::new("/");
		history.push("/browser").unwrap();
		history.push("/create").unwrap();
		history.back().unwrap();

		history.push("/browser?dir=meshes").unwrap();

		assert_eq!(
			history.entries(),
			&["/", "/browser", "/browser?dir=meshes"]
		);
		assert!(!history.can_go_forward());
	}

	#[rstest]
	fn test_memory_history_forward() {
		let mut history = MemoryHistory::new("/");
		history.push("/browser").unwrap();
		history.back().unwrap();

		assert_eq!(history.forward().unwrap(), Some("/browser".to_string()));
		assert_eq!(history.forward().unwrap(), None);
	}

	#[rstest]
	fn test_memory_history_replace_keeps_length() {
		let mut history = MemoryHistory::new("/");
		history.push("/browser").unwrap();

		history.replace("/create").unwrap();

		assert_eq!(history.entries(), &["/", "/create"]);
		assert_eq!(history.location().unwrap(), "/create");
	}

	#[rstest]
	fn test_memory_history_default_starts_at_root() {
		let history = MemoryHistory::default();

		assert_eq!(history.location().unwrap(), "/");
		assert!(!history.is_empty());
		assert!(!history.can_go_back());
	}
}
