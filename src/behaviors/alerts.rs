//! Auto-dismissal of transient alert banners.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element};

use super::{BehaviorError, elements_of};
use crate::capabilities::Scheduler;
use crate::config::UiConfig;

#[wasm_bindgen]
extern "C" {
	/// Bootstrap's alert widget. Closing through it keeps the library's
	/// fade-out transition and `closed.bs.alert` event.
	#[wasm_bindgen(js_namespace = bootstrap)]
	type Alert;

	#[wasm_bindgen(constructor, js_namespace = bootstrap)]
	fn new(element: &Element) -> Alert;

	#[wasm_bindgen(method)]
	fn close(this: &Alert);
}

/// Schedules dismissal of every dismissible alert on the page.
///
/// Each alert gets its own independent timer; a permanent alert (excluded by
/// the selector) is left alone. Timers cannot be canceled once scheduled.
pub fn attach_auto_hide_alerts(
	document: &Document,
	config: &UiConfig,
	scheduler: &dyn Scheduler,
) -> Result<(), BehaviorError> {
	let selector = &config.alert_selector;
	let alerts = document
		.query_selector_all(selector)
		.map_err(|err| BehaviorError::selector(selector, err))?;

	for alert in elements_of(&alerts) {
		scheduler.delay(
			config.alert_hide_delay_ms,
			Box::new(move || dismiss(&alert)),
		);
	}

	Ok(())
}

/// Closes one alert, through Bootstrap when it is loaded, otherwise by
/// removing the element outright.
fn dismiss(element: &Element) {
	if bootstrap_loaded() {
		Alert::new(element).close();
	} else {
		element.remove();
	}
}

fn bootstrap_loaded() -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	let target: &JsValue = window.as_ref();
	js_sys::Reflect::has(target, &JsValue::from_str("bootstrap")).unwrap_or(false)
}
