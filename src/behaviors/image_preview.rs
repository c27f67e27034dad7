//! Thumbnail preview for image file inputs.
//!
//! No Chirper page renders an upload form yet, so nothing calls this from
//! [`init_ui_behaviors`](super::init_ui_behaviors); a page that grows one
//! attaches it explicitly.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use super::{BehaviorError, elements_of};
use crate::config::UiConfig;

/// Attaches a preview renderer to every image file input.
///
/// On file selection the first selected file is read as a data URL (one
/// read per change event) and rendered as
/// `<img class="img-thumbnail mt-2" style="max-width: 200px">` appended to
/// the input's parent. Any previous preview under the same parent is
/// removed first, so each input shows at most one thumbnail.
pub fn attach_image_preview(document: &Document, config: &UiConfig) -> Result<(), BehaviorError> {
	let selector = &config.image_input_selector;
	let inputs = document
		.query_selector_all(selector)
		.map_err(|err| BehaviorError::selector(selector, err))?;

	for input in elements_of(&inputs) {
		let Some(input) = input.dyn_ref::<web_sys::HtmlInputElement>().cloned() else {
			continue;
		};

		let document = document.clone();
		let input_el = input.clone();
		let on_change = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			let Some(file) = input_el.files().and_then(|files| files.get(0)) else {
				return;
			};
			let Ok(reader) = web_sys::FileReader::new() else {
				return;
			};

			let reader_el = reader.clone();
			let input_el = input_el.clone();
			let document = document.clone();
			let on_load = Closure::wrap(Box::new(move |_event: web_sys::ProgressEvent| {
				let Some(data_url) = reader_el.result().ok().and_then(|v| v.as_string()) else {
					return;
				};
				render_preview(&document, &input_el, &data_url);
			}) as Box<dyn FnMut(_)>);

			reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
			on_load.forget();

			// The read cannot be aborted once started; a failing read
			// simply never fires onload.
			let _ = reader.read_as_data_url(&file);
		}) as Box<dyn FnMut(_)>);

		input
			.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
			.map_err(BehaviorError::dom)?;
		on_change.forget();
	}

	Ok(())
}

fn render_preview(document: &Document, input: &web_sys::HtmlInputElement, data_url: &str) {
	let Some(parent) = input.parent_element() else {
		return;
	};

	if let Ok(Some(previous)) = parent.query_selector(".img-thumbnail") {
		previous.remove();
	}

	let Ok(preview) = document.create_element("img") else {
		return;
	};
	preview.set_class_name("img-thumbnail mt-2");
	let _ = preview.set_attribute("src", data_url);
	let _ = preview.set_attribute("style", "max-width: 200px");
	let _ = parent.append_child(&preview);
}
