//! DOM wiring for the page behaviors (WASM only).
//!
//! Each `attach_*` function is an independent page-load initializer: it
//! queries the document for its target elements, attaches listeners, and is
//! a silent no-op when nothing matches. Listeners are leaked with
//! `Closure::forget` and live until the page unloads; nothing is attached
//! twice within one page load.
//!
//! [`UiBehaviors`] is the composition root the page entry points drive on
//! `DOMContentLoaded`, with the browser dialogs and timer injected as
//! capabilities so tests can fake them.

mod alerts;
mod counter;
mod follow;
mod image_preview;
mod tweet_form;

pub use alerts::attach_auto_hide_alerts;
pub use counter::attach_character_counter;
pub use follow::attach_follow_confirmation;
pub use image_preview::attach_image_preview;
pub use tweet_form::attach_tweet_form_validation;

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::capabilities::{BrowserDialogs, BrowserScheduler, Confirmer, Notifier, Scheduler};
use crate::config::UiConfig;
use crate::warn_log;

/// Failure while attaching a behavior to the document.
///
/// Attachment failures are never fatal to the page; the composition root
/// logs them and moves on to the next behavior.
#[derive(Debug, Error)]
pub enum BehaviorError {
	#[error("selector {selector:?} failed: {detail}")]
	Selector { selector: String, detail: String },
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl BehaviorError {
	pub(crate) fn selector(selector: &str, err: JsValue) -> Self {
		Self::Selector {
			selector: selector.to_string(),
			detail: js_detail(&err),
		}
	}

	pub(crate) fn dom(err: JsValue) -> Self {
		Self::Dom(js_detail(&err))
	}
}

fn js_detail(value: &JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{value:?}"))
}

/// Iterates the element entries of a `NodeList`.
pub(crate) fn elements_of(
	list: &web_sys::NodeList,
) -> impl Iterator<Item = web_sys::Element> + '_ {
	(0..list.length())
		.filter_map(|index| list.item(index))
		.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
}

/// Composition root for the page behaviors.
///
/// Holds the page configuration and the injected capabilities;
/// [`UiBehaviors::attach`] registers every live behavior against a document.
pub struct UiBehaviors {
	config: Rc<UiConfig>,
	notifier: Rc<dyn Notifier>,
	confirmer: Rc<dyn Confirmer>,
	scheduler: Rc<dyn Scheduler>,
}

impl UiBehaviors {
	/// Behaviors backed by the real browser dialogs and timers.
	pub fn new(config: UiConfig) -> Self {
		Self::with_capabilities(
			config,
			Rc::new(BrowserDialogs),
			Rc::new(BrowserDialogs),
			Rc::new(BrowserScheduler),
		)
	}

	/// Behaviors with explicit capabilities, for tests and embedders.
	pub fn with_capabilities(
		config: UiConfig,
		notifier: Rc<dyn Notifier>,
		confirmer: Rc<dyn Confirmer>,
		scheduler: Rc<dyn Scheduler>,
	) -> Self {
		Self {
			config: Rc::new(config),
			notifier,
			confirmer,
			scheduler,
		}
	}

	/// Attaches every live behavior to `document`.
	///
	/// Behaviors are independent: one failing to attach does not stop the
	/// others. Failures are logged, never propagated, so a page missing a
	/// target element simply does not get that convenience.
	pub fn attach(&self, document: &Document) {
		if let Err(err) = attach_character_counter(document, &self.config) {
			warn_log!("character counter not attached: {err}");
		}
		if let Err(err) =
			attach_auto_hide_alerts(document, &self.config, self.scheduler.as_ref())
		{
			warn_log!("alert auto-hide not attached: {err}");
		}
		if let Err(err) = attach_tweet_form_validation(
			document,
			Rc::clone(&self.config),
			Rc::clone(&self.notifier),
		) {
			warn_log!("tweet form validation not attached: {err}");
		}
		if let Err(err) = attach_follow_confirmation(
			document,
			Rc::clone(&self.config),
			Rc::clone(&self.confirmer),
		) {
			warn_log!("follow confirmation not attached: {err}");
		}
	}
}

/// Entry point called by the page once the DOM content has loaded.
///
/// Attaches the default behavior set with the default configuration. The
/// image preview is not part of the default set; pages with an upload form
/// call [`attach_image_preview`] themselves.
#[wasm_bindgen(js_name = initUiBehaviors)]
pub fn init_ui_behaviors() {
	console_error_panic_hook::set_once();

	let Some(document) = web_sys::window().and_then(|window| window.document()) else {
		return;
	};

	UiBehaviors::new(UiConfig::default()).attach(&document);
}

/// Entry point for pages that override parts of the configuration.
///
/// `config_json` overrides any subset of [`UiConfig`]'s defaults. Malformed
/// JSON is logged and falls back to the defaults rather than leaving the
/// page without behaviors.
#[wasm_bindgen(js_name = initUiBehaviorsWithConfig)]
pub fn init_ui_behaviors_with_config(config_json: &str) {
	console_error_panic_hook::set_once();

	let Some(document) = web_sys::window().and_then(|window| window.document()) else {
		return;
	};

	let config = match UiConfig::from_json(config_json) {
		Ok(config) => config,
		Err(err) => {
			warn_log!("invalid behavior config, using defaults: {err}");
			UiConfig::default()
		}
	};

	UiBehaviors::new(config).attach(&document);
}
