//! Requested locations.
//!
//! A location string such as `/browser?dir=meshes#top` is split into its path,
//! query and fragment. Routes match on the path only.

use std::fmt;
use urdfhub_core::RouteProps;

/// A parsed location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
	path: String,
	query: Option<String>,
	fragment: Option<String>,
}

impl Location {
	/// Parses a location string.
	///
	/// An empty path is treated as `/`. Empty query and fragment parts are
	/// dropped, so `/browser?` and `/browser` are the same location.
	pub fn parse(location: &str) -> Self {
		let (rest, fragment) = match location.split_once('#') {
			Some((rest, fragment)) => (rest, non_empty(fragment)),
			None => (location, None),
		};
		let (path, query) = match rest.split_once('?') {
			Some((path, query)) => (path, non_empty(query)),
			None => (rest, None),
		};

		Self {
			path: if path.is_empty() {
				"/".to_string()
			} else {
				path.to_string()
			},
			query,
			fragment,
		}
	}

	/// Returns the path component.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the raw query string, without the leading `?`.
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// Returns the fragment, without the leading `#`.
	pub fn fragment(&self) -> Option<&str> {
		self.fragment.as_deref()
	}

	/// Decodes the query string into route props.
	///
	/// Later duplicates of a key win. A query that cannot be decoded yields
	/// empty props and a warning.
	pub fn props(&self) -> RouteProps {
		let Some(query) = self.query.as_deref() else {
			return RouteProps::new();
		};

		match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
			Ok(pairs) => pairs.into_iter().collect(),
			Err(e) => {
				tracing::warn!(query = %query, "Failed to decode query string: {}", e);
				RouteProps::new()
			}
		}
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path)?;
		if let Some(query) = &self.query {
			write!(f, "?{}", query)?;
		}
		if let Some(fragment) = &self.fragment {
			write!(f, "#{}", fragment)?;
		}
		Ok(())
	}
}

impl From<&str> for Location {
	fn from(location: &str) -> Self {
		Self::parse(location)
	}
}

fn non_empty(s: &str) -> Option<String> {
	(!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", "/", None, None)]
	#[case("", "/", None, None)]
	#[case("/browser", "/browser", None, None)]
	#[case("/browser?dir=meshes", "/browser", Some("dir=meshes"), None)]
	#[case("/browser?dir=meshes#top", "/browser", Some("dir=meshes"), Some("top"))]
	#[case("/create#form", "/create", None, Some("form"))]
	#[case("/browser?#", "/browser", None, None)]
	#[case("?dir=a", "/", Some("dir=a"), None)]
	fn test_parse(
		#[case] input: &str,
		#[case] path: &str,
		#[case] query: Option<&str>,
		#[case] fragment: Option<&str>,
	) {
		let location = Location::parse(input);

		assert_eq!(location.path(), path);
		assert_eq!(location.query(), query);
		assert_eq!(location.fragment(), fragment);
	}

	#[rstest]
	#[case("/browser?dir=meshes#top")]
	#[case("/create")]
	#[case("/")]
	fn test_display_reassembles(#[case] input: &str) {
		assert_eq!(Location::parse(input).to_string(), input);
	}

	#[rstest]
	fn test_props_decode_percent_and_plus() {
		let location = Location::parse("/browser?dir=robot%20arms&q=base+link");

		let props = location.props();

		assert_eq!(props.get("dir"), Some("robot arms"));
		assert_eq!(props.get("q"), Some("base link"));
	}

	#[rstest]
	fn test_props_later_duplicate_wins() {
		let props = Location::parse("/browser?dir=a&dir=b").props();

		assert_eq!(props.len(), 1);
		assert_eq!(props.get("dir"), Some("b"));
	}

	#[rstest]
	fn test_props_without_query_are_empty() {
		assert!(Location::parse("/browser").props().is_empty());
	}
}
