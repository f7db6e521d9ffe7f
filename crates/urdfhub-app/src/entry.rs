//! WASM entry point.

use crate::app::{App, RunningApp};
use crate::document::BrowserDocument;
use crate::error::BootstrapError;
use crate::settings::Settings;
use crate::views::is_internal_href;
use std::cell::RefCell;
use std::rc::Rc;
use urdfhub_core::ThreeRenderer;
use urdfhub_router::{BrowserHistory, Router};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, Window, window};

/// Id of an optional `<script type="application/toml">` element holding
/// settings.
pub const SETTINGS_ELEMENT_ID: &str = "urdfhub-settings";

/// Called when the WASM module is loaded.
#[allow(clippy::main_recursion)]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	tracing_wasm::set_as_global_default();

	let window = window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	let running = match start(&document) {
		Ok(running) => running,
		Err(error) => {
			let message = error.to_string();
			web_sys::console::error_1(&JsValue::from_str(&message));
			report_startup_failure(&document, &message);
			return Err(JsValue::from_str(&message));
		}
	};

	install_link_handler(&document, running.router())?;
	install_popstate_handler(&window, running.router())?;

	// The application lives as long as the page.
	std::mem::forget(running);
	Ok(())
}

fn start(document: &Document) -> Result<RunningApp, BootstrapError> {
	let settings = load_settings(document)?;
	let mut app = App::new(settings).history(BrowserHistory::new());

	match ThreeRenderer::from_global() {
		Ok(three) => app = app.renderer(three),
		Err(error) => warn_console(&error.to_string()),
	}

	app.mount(&BrowserDocument::new(document.clone()))
}

fn load_settings(document: &Document) -> Result<Settings, BootstrapError> {
	let source = document
		.get_element_by_id(SETTINGS_ELEMENT_ID)
		.and_then(|element| element.text_content());
	match source {
		Some(source) => Ok(Settings::from_toml_str(&source)?),
		None => Ok(Settings::default()),
	}
}

/// Shows a visible notice when the application could not start.
fn report_startup_failure(document: &Document, message: &str) {
	let Some(body) = document.body() else {
		return;
	};
	let Ok(notice) = document.create_element("div") else {
		return;
	};
	for (name, value) in [("class", "urdfhub-startup-failure"), ("role", "alert")] {
		if let Err(error) = notice.set_attribute(name, value) {
			warn_console(&format!("Failed to set '{name}' on failure notice: {error:?}"));
		}
	}
	notice.set_text_content(Some(&format!("URDF Hub failed to start: {message}")));
	if let Err(error) = body.append_child(&notice) {
		warn_console(&format!("Failed to show failure notice: {error:?}"));
	}
}

fn warn_console(message: &str) {
	web_sys::console::warn_1(&JsValue::from_str(message));
}


/// Routes clicks on internal links through the router.
fn install_link_handler(document: &Document, router: Rc<RefCell<Router>>) -> Result<(), JsValue> {
	let link_handler = Closure::wrap(Box::new(move |event: Event| {
		if let Some(target) = event.target()
			&& let Ok(element) = target.dyn_into::<HtmlElement>()
		{
			// Find the closest <a> tag
			let mut current = Some(element);
			while let Some(el) = current {
				if el.tag_name().eq_ignore_ascii_case("a") {
					if let Some(href) = el.get_attribute("href")
						&& is_internal_href(&href)
					{
						event.prevent_default();
						match router.try_borrow_mut() {
							Ok(mut router) => {
								if let Err(error) = router.navigate(href.as_str()) {
									tracing::warn!(href = %href, error = %error, "Link navigation failed");
								}
							}
							Err(_) => tracing::warn!(href = %href, "Router busy, link ignored"),
						}
					}
					return;
				}
				current = el
					.parent_element()
					.and_then(|p| p.dyn_into::<HtmlElement>().ok());
			}
		}
	}) as Box<dyn FnMut(_)>);

	document.add_event_listener_with_callback("click", link_handler.as_ref().unchecked_ref())?;
	link_handler.forget();
	Ok(())
}

/// Replays browser back/forward moves.
fn install_popstate_handler(window: &Window, router: Rc<RefCell<Router>>) -> Result<(), JsValue> {
	let popstate_handler = Closure::wrap(Box::new(move |_event: Event| {
		let Some(location) = current_location() else {
			return;
		};
		match router.try_borrow_mut() {
			Ok(mut router) => {
				router.sync_location(&location);
			}
			Err(_) => tracing::warn!(location = %location, "Router busy, popstate ignored"),
		}
	}) as Box<dyn FnMut(_)>);

	window.add_event_listener_with_callback("popstate", popstate_handler.as_ref().unchecked_ref())?;
	popstate_handler.forget();
	Ok(())
}

fn current_location() -> Option<String> {
	let location = window()?.location();
	let mut current = location.pathname().ok()?;
	current.push_str(&location.search().unwrap_or_default());
	current.push_str(&location.hash().unwrap_or_default());
	Some(current)
}
