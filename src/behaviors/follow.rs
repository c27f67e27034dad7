//! Confirmation dialog on unfollow buttons.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use super::{BehaviorError, elements_of};
use crate::capabilities::Confirmer;
use crate::config::UiConfig;

/// Intercepts clicks on every unfollow submit button.
///
/// A declined confirmation cancels the click's default action, so the
/// surrounding form does not submit. An accepted confirmation leaves the
/// click untouched.
pub fn attach_follow_confirmation(
	document: &Document,
	config: Rc<UiConfig>,
	confirmer: Rc<dyn Confirmer>,
) -> Result<(), BehaviorError> {
	let selector = &config.unfollow_button_selector;
	let buttons = document
		.query_selector_all(selector)
		.map_err(|err| BehaviorError::selector(selector, err))?;

	for button in elements_of(&buttons) {
		let config = Rc::clone(&config);
		let confirmer = Rc::clone(&confirmer);

		let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
			if !confirmer.confirm(&config.messages.unfollow_confirm) {
				event.prevent_default();
			}
		}) as Box<dyn FnMut(_)>);

		button
			.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
			.map_err(BehaviorError::dom)?;
		on_click.forget();
	}

	Ok(())
}
