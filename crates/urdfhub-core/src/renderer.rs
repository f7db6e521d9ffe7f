//! 3D scene renderer capability.
//!
//! The application resolves the rendering library once at startup and hands
//! it to views through [`ViewContext`](crate::view::ViewContext). Views never
//! reach for a global binding themselves.

use thiserror::Error;

/// Errors raised while binding a renderer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RendererError {
	/// The rendering library is not loaded in the host.
	#[error("3D renderer unavailable: {0}")]
	Unavailable(String),
}

/// A 3D rendering backend usable by views.
pub trait SceneRenderer {
	/// Short backend identifier, e.g. `"three"`.
	fn backend(&self) -> &str;

	/// Library revision, when the backend reports one.
	fn revision(&self) -> Option<String> {
		None
	}

	/// Whether scenes can actually be drawn.
	fn is_available(&self) -> bool {
		true
	}
}

/// Renderer used when no 3D library is bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl SceneRenderer for NullRenderer {
	fn backend(&self) -> &str {
		"none"
	}

	fn is_available(&self) -> bool {
		false
	}
}

/// three.js namespace resolved from the page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct ThreeRenderer {
	namespace: wasm_bindgen::JsValue,
}

#[cfg(target_arch = "wasm32")]
impl ThreeRenderer {
	/// Looks up the `THREE` namespace loaded by the host page.
	pub fn from_global() -> Result<Self, RendererError> {
		let namespace = js_sys::Reflect::get(&js_sys::global(), &"THREE".into())
			.map_err(|_| RendererError::Unavailable("global lookup failed".to_string()))?;
		if namespace.is_undefined() || namespace.is_null() {
			return Err(RendererError::Unavailable(
				"THREE is not loaded".to_string(),
			));
		}
		Ok(Self { namespace })
	}

	/// Returns the raw namespace object for views that drive three.js directly.
	pub fn namespace(&self) -> &wasm_bindgen::JsValue {
		&self.namespace
	}
}

#[cfg(target_arch = "wasm32")]
impl SceneRenderer for ThreeRenderer {
	fn backend(&self) -> &str {
		"three"
	}

	fn revision(&self) -> Option<String> {
		js_sys::Reflect::get(&self.namespace, &"REVISION".into())
			.ok()
			.and_then(|v| v.as_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_null_renderer_is_unavailable() {
		let renderer = NullRenderer;

		assert_eq!(renderer.backend(), "none");
		assert!(!renderer.is_available());
		assert_eq!(renderer.revision(), None);
	}

	#[rstest]
	fn test_renderer_error_display() {
		assert_eq!(
			RendererError::Unavailable("THREE is not loaded".to_string()).to_string(),
			"3D renderer unavailable: THREE is not loaded"
		);
	}
}
