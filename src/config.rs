//! Page configuration for the UI behaviors.
//!
//! Selectors, limits, and dialog strings live in one explicit configuration
//! value instead of being scattered through the behaviors. That keeps the
//! implicit contract with the server-rendered markup in one place and lets a
//! host page override any part of it, including the message table (the
//! defaults are the Japanese strings the Chirper pages ship with).
//!
//! Both structs deserialize with `serde`, so a page can hand the WASM entry a
//! JSON blob instead of compiling its own configuration in.

use serde::{Deserialize, Serialize};

/// Default tweet length limit in characters.
pub const TWEET_MAX_CHARS: usize = 140;

/// Default delay before a dismissible alert is auto-closed.
pub const ALERT_HIDE_DELAY_MS: u32 = 5_000;

/// Selectors, limits, and messages for one page.
///
/// `Default` reproduces the contract of the Chirper templates exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
	/// The tweet content input. Only the first match gets a counter.
	pub content_input_selector: String,
	/// Alerts that auto-dismiss. Permanent alerts opt out via class.
	pub alert_selector: String,
	/// Forms validated as tweet forms on submit.
	pub tweet_form_selector: String,
	/// Submit buttons that require an unfollow confirmation.
	pub unfollow_button_selector: String,
	/// File inputs that get an image preview.
	pub image_input_selector: String,
	/// Maximum tweet length, counted in Unicode scalar values.
	pub tweet_max_chars: usize,
	/// Delay before a dismissible alert is closed.
	pub alert_hide_delay_ms: u32,
	/// User-facing dialog strings.
	pub messages: Messages,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			content_input_selector: "#content, #tweetContent".to_string(),
			alert_selector: ".alert:not(.alert-permanent)".to_string(),
			tweet_form_selector: r#"form[action*="/tweet"]"#.to_string(),
			unfollow_button_selector: r#"form[action*="/unfollow"] button[type="submit"]"#
				.to_string(),
			image_input_selector: r#"input[type="file"][accept="image/*"]"#.to_string(),
			tweet_max_chars: TWEET_MAX_CHARS,
			alert_hide_delay_ms: ALERT_HIDE_DELAY_MS,
			messages: Messages::default(),
		}
	}
}

/// User-facing dialog strings.
///
/// `tweet_too_long` may contain a `{max}` placeholder which is replaced with
/// the configured limit when the message is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	/// Shown when a tweet form is submitted with empty content.
	pub tweet_required: String,
	/// Shown when the content exceeds the limit. Supports `{max}`.
	pub tweet_too_long: String,
	/// Confirmation prompt on the unfollow button.
	pub unfollow_confirm: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			tweet_required: "ツイート内容を入力してください".to_string(),
			tweet_too_long: "ツイートは{max}文字以内で入力してください".to_string(),
			unfollow_confirm: "フォローを解除しますか?".to_string(),
		}
	}
}

impl Messages {
	/// Renders the over-limit message with the configured limit.
	pub fn too_long_message(&self, max_chars: usize) -> String {
		self.tweet_too_long.replace("{max}", &max_chars.to_string())
	}
}

impl UiConfig {
	/// Parses a configuration from JSON, overriding any subset of the
	/// defaults. This is how a page hands its own selectors or messages to
	/// the WASM entry point.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
