//! Client-side form validation.
//!
//! Field-level checks that run before a form submits, mirroring the rules
//! the Chirper backend enforces. These exist purely to give the user faster
//! feedback; the server revalidates everything and MUST NOT trust any of
//! this.
//!
//! Each `validate_*` function returns a [`ValidationReport`]: an empty
//! report means the submission may proceed.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Messages;

static USERNAME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^[A-Za-z0-9_]{3,20}$").expect("username pattern compiles"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new("^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern compiles")
});

const MIN_USERNAME_CHARS: usize = 3;
const MAX_USERNAME_CHARS: usize = 20;
const MIN_PASSWORD_CHARS: usize = 8;
const MAX_DISPLAY_NAME_CHARS: usize = 50;
const MAX_BIO_CHARS: usize = 160;

/// A validation failure on one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	/// Field name as rendered in the form.
	pub field: String,
	/// User-facing message.
	pub message: String,
}

impl FieldError {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}
}

/// Aggregated result of validating one form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
	errors: Vec<FieldError>,
}

impl ValidationReport {
	/// A report with no errors.
	pub fn valid() -> Self {
		Self::default()
	}

	/// A report carrying at least one error.
	pub fn invalid(errors: Vec<FieldError>) -> Self {
		Self { errors }
	}

	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	/// The first error message, if any. Blocking dialogs show one message.
	pub fn first_message(&self) -> Option<&str> {
		self.errors.first().map(|e| e.message.as_str())
	}
}

/// Validates tweet content before submit.
///
/// The content is trimmed first; length is counted in Unicode scalar values
/// against `max_chars`. Exactly `max_chars` characters passes.
pub fn validate_tweet(content: &str, max_chars: usize, messages: &Messages) -> ValidationReport {
	let trimmed = content.trim();

	if trimmed.is_empty() {
		return ValidationReport::invalid(vec![FieldError::new(
			"content",
			messages.tweet_required.clone(),
		)]);
	}

	if trimmed.chars().count() > max_chars {
		return ValidationReport::invalid(vec![FieldError::new(
			"content",
			messages.too_long_message(max_chars),
		)]);
	}

	ValidationReport::valid()
}

/// Validates the login form.
pub fn validate_login_form(username: &str, password: &str) -> ValidationReport {
	let mut errors = Vec::new();
	errors.extend(validate_username_field(username));
	errors.extend(validate_password_field(password));

	if errors.is_empty() {
		ValidationReport::valid()
	} else {
		ValidationReport::invalid(errors)
	}
}

/// Validates the registration form.
pub fn validate_registration_form(
	username: &str,
	email: &str,
	password: &str,
	password_confirm: &str,
) -> ValidationReport {
	let mut errors = Vec::new();
	errors.extend(validate_username_field(username));
	errors.extend(validate_email_field(email));
	errors.extend(validate_password_field(password));

	if password != password_confirm {
		errors.push(FieldError::new(
			"passwordConfirm",
			"パスワードが一致しません",
		));
	}

	if errors.is_empty() {
		ValidationReport::valid()
	} else {
		ValidationReport::invalid(errors)
	}
}

/// Validates the profile edit form. Blank fields are left to the server's
/// defaults and skipped here.
pub fn validate_profile_edit_form(
	display_name: &str,
	bio: &str,
	avatar_url: &str,
) -> ValidationReport {
	let mut errors = Vec::new();

	if !display_name.trim().is_empty() && display_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
		errors.push(FieldError::new(
			"displayName",
			format!("表示名は{MAX_DISPLAY_NAME_CHARS}文字以下である必要があります"),
		));
	}

	if !bio.trim().is_empty() && bio.chars().count() > MAX_BIO_CHARS {
		errors.push(FieldError::new(
			"bio",
			format!("自己紹介は{MAX_BIO_CHARS}文字以下である必要があります"),
		));
	}

	if !avatar_url.trim().is_empty()
		&& !avatar_url.starts_with("http://")
		&& !avatar_url.starts_with("https://")
	{
		errors.push(FieldError::new("avatarUrl", "有効なURLを入力してください"));
	}

	if errors.is_empty() {
		ValidationReport::valid()
	} else {
		ValidationReport::invalid(errors)
	}
}

fn validate_username_field(username: &str) -> Vec<FieldError> {
	let mut errors = Vec::new();

	if username.trim().is_empty() {
		errors.push(FieldError::new("username", "ユーザー名は必須です"));
		return errors;
	}

	let len = username.chars().count();
	if len < MIN_USERNAME_CHARS {
		errors.push(FieldError::new(
			"username",
			format!("ユーザー名は{MIN_USERNAME_CHARS}文字以上である必要があります"),
		));
	}
	if len > MAX_USERNAME_CHARS {
		errors.push(FieldError::new(
			"username",
			format!("ユーザー名は{MAX_USERNAME_CHARS}文字以下である必要があります"),
		));
	}
	if !USERNAME_RE.is_match(username) {
		errors.push(FieldError::new(
			"username",
			"ユーザー名は英数字とアンダースコアのみ使用できます",
		));
	}

	errors
}

fn validate_email_field(email: &str) -> Vec<FieldError> {
	let mut errors = Vec::new();

	if email.trim().is_empty() {
		errors.push(FieldError::new("email", "メールアドレスは必須です"));
		return errors;
	}

	if !EMAIL_RE.is_match(email) {
		errors.push(FieldError::new(
			"email",
			"有効なメールアドレスを入力してください",
		));
	}

	errors
}

fn validate_password_field(password: &str) -> Vec<FieldError> {
	let mut errors = Vec::new();

	if password.is_empty() {
		errors.push(FieldError::new("password", "パスワードは必須です"));
		return errors;
	}

	if password.chars().count() < MIN_PASSWORD_CHARS {
		errors.push(FieldError::new(
			"password",
			format!("パスワードは{MIN_PASSWORD_CHARS}文字以上である必要があります"),
		));
	}

	errors
}
