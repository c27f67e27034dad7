//! Submit-time validation of tweet forms.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use super::{BehaviorError, elements_of};
use crate::capabilities::Notifier;
use crate::config::UiConfig;
use crate::validation::validate_tweet;

/// Intercepts submission of every tweet form on the page.
///
/// On submit the first `<textarea>` in the form is validated with
/// [`validate_tweet`]; a failing report cancels the submission and surfaces
/// the first error through the notifier. Valid content submits unmodified.
/// A form without a textarea is left alone.
pub fn attach_tweet_form_validation(
	document: &Document,
	config: Rc<UiConfig>,
	notifier: Rc<dyn Notifier>,
) -> Result<(), BehaviorError> {
	let selector = &config.tweet_form_selector;
	let forms = document
		.query_selector_all(selector)
		.map_err(|err| BehaviorError::selector(selector, err))?;

	for form in elements_of(&forms) {
		let config = Rc::clone(&config);
		let notifier = Rc::clone(&notifier);
		let form_el = form.clone();

		let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
			let Ok(Some(field)) = form_el.query_selector("textarea") else {
				return;
			};
			let content = field
				.dyn_ref::<web_sys::HtmlTextAreaElement>()
				.map(|textarea| textarea.value())
				.unwrap_or_default();

			let report = validate_tweet(&content, config.tweet_max_chars, &config.messages);
			if let Some(message) = report.first_message() {
				event.prevent_default();
				notifier.alert(message);
			}
		}) as Box<dyn FnMut(_)>);

		form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
			.map_err(BehaviorError::dom)?;
		on_submit.forget();
	}

	Ok(())
}
