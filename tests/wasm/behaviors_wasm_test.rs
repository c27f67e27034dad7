//! DOM tests for the page behaviors.
//!
//! These run against a real browser DOM and exercise the attach functions
//! end to end: fixture markup goes into the body, the behavior attaches,
//! events are dispatched, and the resulting DOM mutations (or prevented
//! defaults) are asserted. Dialogs and timers are injected fakes, so no
//! test blocks on a real `alert`/`confirm` or waits out a real timeout.
//!
//! **Run with**: `wasm-pack test --chrome --headless`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use chirper_ui::behaviors::{
	attach_auto_hide_alerts, attach_character_counter, attach_follow_confirmation,
	attach_image_preview, attach_tweet_form_validation,
};
use chirper_ui::capabilities::{Confirmer, Notifier, Scheduler};
use chirper_ui::config::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTextAreaElement};

// ============================================================================
// Fakes
// ============================================================================

/// Records every alert message instead of showing a dialog.
#[derive(Default)]
struct RecordingNotifier {
	messages: Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
	fn alert(&self, message: &str) {
		self.messages.borrow_mut().push(message.to_string());
	}
}

/// Answers every confirmation with a fixed verdict.
struct FixedConfirmer(bool);

impl Confirmer for FixedConfirmer {
	fn confirm(&self, _message: &str) -> bool {
		self.0
	}
}

/// Runs scheduled callbacks immediately and records the requested delays.
#[derive(Default)]
struct ImmediateScheduler {
	delays: Rc<RefCell<Vec<u32>>>,
}

impl Scheduler for ImmediateScheduler {
	fn delay(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
		self.delays.borrow_mut().push(delay_ms);
		callback();
	}
}

// ============================================================================
// Fixture helpers
// ============================================================================

fn document() -> Document {
	web_sys::window()
		.expect("window")
		.document()
		.expect("document")
}

fn set_body(html: &str) -> Document {
	let document = document();
	document.body().expect("body").set_inner_html(html);
	document
}

fn dispatch_cancelable(target: &web_sys::EventTarget, event_type: &str) -> web_sys::Event {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event =
		web_sys::Event::new_with_event_init_dict(event_type, &init).expect("create event");
	target.dispatch_event(&event).expect("dispatch");
	event
}

// ============================================================================
// Character counter
// ============================================================================

#[wasm_bindgen_test]
fn test_counter_appended_and_tracks_input() {
	let document = set_body(r#"<div><textarea id="content"></textarea></div>"#);
	attach_character_counter(&document, &UiConfig::default()).expect("attach");

	let counter = document
		.query_selector(".char-count")
		.expect("query")
		.expect("counter exists");
	assert_eq!(counter.text_content().unwrap(), "0 / 140");

	let textarea: HtmlTextAreaElement = document
		.get_element_by_id("content")
		.expect("textarea")
		.dyn_into()
		.expect("cast");
	textarea.set_value("hello");
	dispatch_cancelable(&textarea, "input");

	assert_eq!(counter.text_content().unwrap(), "5 / 140");
	assert_eq!(counter.class_name(), "char-count mt-2 text-end");
}

#[wasm_bindgen_test]
fn test_counter_warning_and_danger_classes() {
	let document = set_body(r#"<div><textarea id="tweetContent"></textarea></div>"#);
	attach_character_counter(&document, &UiConfig::default()).expect("attach");

	let counter = document
		.query_selector(".char-count")
		.expect("query")
		.expect("counter exists");
	let textarea: HtmlTextAreaElement = document
		.get_element_by_id("tweetContent")
		.expect("textarea")
		.dyn_into()
		.expect("cast");

	textarea.set_value(&"a".repeat(127));
	dispatch_cancelable(&textarea, "input");
	assert!(counter.class_list().contains("warning"));
	assert!(!counter.class_list().contains("danger"));

	textarea.set_value(&"a".repeat(141));
	dispatch_cancelable(&textarea, "input");
	assert!(counter.class_list().contains("danger"));
	assert!(!counter.class_list().contains("warning"));
	assert_eq!(counter.text_content().unwrap(), "141 / 140");

	// Back under 90% restores the neutral state.
	textarea.set_value("ok");
	dispatch_cancelable(&textarea, "input");
	assert!(!counter.class_list().contains("warning"));
	assert!(!counter.class_list().contains("danger"));
}

#[wasm_bindgen_test]
fn test_counter_absent_input_is_noop() {
	let document = set_body("<p>no inputs here</p>");
	attach_character_counter(&document, &UiConfig::default()).expect("attach");
	assert!(
		document
			.query_selector(".char-count")
			.expect("query")
			.is_none()
	);
}

// ============================================================================
// Alert auto-hide
// ============================================================================

#[wasm_bindgen_test]
fn test_alerts_dismissed_after_delay() {
	let document = set_body(
		r#"<div class="alert">bye</div>
		<div class="alert alert-permanent">stay</div>
		<div class="alert">bye too</div>"#,
	);
	let scheduler = ImmediateScheduler::default();
	let delays = Rc::clone(&scheduler.delays);

	attach_auto_hide_alerts(&document, &UiConfig::default(), &scheduler).expect("attach");

	// One independent timer per dismissible alert, each at the configured delay.
	assert_eq!(delays.borrow().as_slice(), &[5_000, 5_000]);

	// Bootstrap is not loaded in the test page, so dismissal falls back to
	// removing the element. The permanent alert is untouched.
	let remaining = document.query_selector_all(".alert").expect("query");
	assert_eq!(remaining.length(), 1);
	assert!(
		document
			.query_selector(".alert-permanent")
			.expect("query")
			.is_some()
	);
}

// ============================================================================
// Tweet form validation
// ============================================================================

#[wasm_bindgen_test]
fn test_empty_tweet_submission_blocked() {
	let document = set_body(
		r#"<form action="/tweet" id="f"><textarea name="content">   </textarea></form>"#,
	);
	let notifier = RecordingNotifier::default();
	let messages = Rc::clone(&notifier.messages);

	attach_tweet_form_validation(
		&document,
		Rc::new(UiConfig::default()),
		Rc::new(notifier),
	)
	.expect("attach");

	let form = document.get_element_by_id("f").expect("form");
	let event = dispatch_cancelable(&form, "submit");

	assert!(event.default_prevented());
	assert_eq!(
		messages.borrow().as_slice(),
		&["ツイート内容を入力してください".to_string()]
	);
}

#[wasm_bindgen_test]
fn test_over_limit_tweet_submission_blocked() {
	let document =
		set_body(r#"<form action="/tweet" id="f"><textarea name="content"></textarea></form>"#);
	let notifier = RecordingNotifier::default();
	let messages = Rc::clone(&notifier.messages);

	attach_tweet_form_validation(
		&document,
		Rc::new(UiConfig::default()),
		Rc::new(notifier),
	)
	.expect("attach");

	let textarea: HtmlTextAreaElement = document
		.query_selector("textarea")
		.expect("query")
		.expect("textarea")
		.dyn_into()
		.expect("cast");
	textarea.set_value(&"a".repeat(141));

	let form = document.get_element_by_id("f").expect("form");
	let event = dispatch_cancelable(&form, "submit");

	assert!(event.default_prevented());
	assert_eq!(
		messages.borrow().as_slice(),
		&["ツイートは140文字以内で入力してください".to_string()]
	);
}

#[wasm_bindgen_test]
fn test_valid_tweet_submission_allowed() {
	let document =
		set_body(r#"<form action="/tweet" id="f"><textarea name="content"></textarea></form>"#);
	let notifier = RecordingNotifier::default();
	let messages = Rc::clone(&notifier.messages);

	attach_tweet_form_validation(
		&document,
		Rc::new(UiConfig::default()),
		Rc::new(notifier),
	)
	.expect("attach");

	let textarea: HtmlTextAreaElement = document
		.query_selector("textarea")
		.expect("query")
		.expect("textarea")
		.dyn_into()
		.expect("cast");
	textarea.set_value(&"a".repeat(140));

	let form = document.get_element_by_id("f").expect("form");
	let event = dispatch_cancelable(&form, "submit");

	assert!(!event.default_prevented());
	assert!(messages.borrow().is_empty());
}

// ============================================================================
// Follow confirmation
// ============================================================================

#[wasm_bindgen_test]
fn test_declined_unfollow_prevents_click() {
	let document = set_body(
		r#"<form action="/unfollow"><button type="submit" id="b">unfollow</button></form>"#,
	);
	attach_follow_confirmation(
		&document,
		Rc::new(UiConfig::default()),
		Rc::new(FixedConfirmer(false)),
	)
	.expect("attach");

	let button = document.get_element_by_id("b").expect("button");
	let event = dispatch_cancelable(&button, "click");
	assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn test_accepted_unfollow_leaves_click_alone() {
	let document = set_body(
		r#"<form action="/unfollow"><button type="submit" id="b">unfollow</button></form>"#,
	);
	attach_follow_confirmation(
		&document,
		Rc::new(UiConfig::default()),
		Rc::new(FixedConfirmer(true)),
	)
	.expect("attach");

	let button = document.get_element_by_id("b").expect("button");
	let event = dispatch_cancelable(&button, "click");
	assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn test_follow_form_button_not_intercepted() {
	// A plain follow form does not match the unfollow selector.
	let document = set_body(
		r#"<form action="/follow"><button type="submit" id="b">follow</button></form>"#,
	);
	attach_follow_confirmation(
		&document,
		Rc::new(UiConfig::default()),
		Rc::new(FixedConfirmer(false)),
	)
	.expect("attach");

	let button = document.get_element_by_id("b").expect("button");
	let event = dispatch_cancelable(&button, "click");
	assert!(!event.default_prevented());
}

// ============================================================================
// Image preview
// ============================================================================

#[wasm_bindgen_test]
fn test_image_preview_attaches_without_inputs() {
	let document = set_body("<p>nothing to preview</p>");
	attach_image_preview(&document, &UiConfig::default()).expect("attach");
}

#[wasm_bindgen_test]
fn test_image_preview_attaches_to_matching_input() {
	let document = set_body(r#"<div><input type="file" accept="image/*"></div>"#);
	attach_image_preview(&document, &UiConfig::default()).expect("attach");

	// A change event with no file selected must be a no-op.
	let input = document.query_selector("input").expect("query").expect("input");
	dispatch_cancelable(&input, "change");
	assert!(
		document
			.query_selector(".img-thumbnail")
			.expect("query")
			.is_none()
	);
}
