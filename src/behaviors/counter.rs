//! Live character counter on the tweet content input.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use super::BehaviorError;
use crate::config::UiConfig;
use crate::counter::{CounterLevel, counter_label};

/// Appends a counter label after the first content input and keeps it in
/// sync with the input length.
///
/// The label is a `<div class="char-count mt-2 text-end">` sibling appended
/// to the input's parent, starting at `0 / {max}`. Every `input` event
/// recomputes the label and swaps the `warning`/`danger` classes. No
/// matching input, or an input outside any parent, is a silent no-op.
pub fn attach_character_counter(
	document: &Document,
	config: &UiConfig,
) -> Result<(), BehaviorError> {
	let selector = &config.content_input_selector;
	let Some(input) = document
		.query_selector(selector)
		.map_err(|err| BehaviorError::selector(selector, err))?
	else {
		return Ok(());
	};
	let Some(parent) = input.parent_element() else {
		return Ok(());
	};

	let max_chars = config.tweet_max_chars;
	let counter = document.create_element("div").map_err(BehaviorError::dom)?;
	counter.set_class_name("char-count mt-2 text-end");
	counter.set_text_content(Some(&counter_label(0, max_chars)));
	parent.append_child(&counter).map_err(BehaviorError::dom)?;

	let input_el = input.clone();
	let counter_el = counter.clone();
	let on_input = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		let len = field_value(&input_el).chars().count();
		counter_el.set_text_content(Some(&counter_label(len, max_chars)));

		let classes = counter_el.class_list();
		let _ = classes.remove_2("warning", "danger");
		if let Some(class) = CounterLevel::for_length(len, max_chars).css_class() {
			let _ = classes.add_1(class);
		}
	}) as Box<dyn FnMut(_)>);

	input
		.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
		.map_err(BehaviorError::dom)?;
	on_input.forget();

	Ok(())
}

/// Current value of a textarea or text input element.
fn field_value(element: &Element) -> String {
	if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
		textarea.value()
	} else if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
		input.value()
	} else {
		String::new()
	}
}
