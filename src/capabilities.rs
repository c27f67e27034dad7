//! Injected browser capabilities.
//!
//! Behaviors never reach for `alert`, `confirm`, or `setTimeout` directly;
//! they take these as trait objects, so DOM tests can substitute
//! deterministic fakes and assert on what would have been shown or
//! scheduled.

/// Shows a blocking message dialog.
pub trait Notifier {
	fn alert(&self, message: &str);
}

/// Shows a blocking yes/no dialog.
pub trait Confirmer {
	/// Returns `true` when the user accepted.
	fn confirm(&self, message: &str) -> bool;
}

/// Schedules a one-shot callback.
///
/// There is no cancellation handle: once scheduled, the callback fires. This
/// matches the alert auto-hide contract, where a pending dismissal cannot be
/// revoked.
pub trait Scheduler {
	fn delay(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Dialogs backed by `window.alert` / `window.confirm`.
///
/// A missing window (or a dialog the embedder suppressed) degrades to the
/// conservative answer: notifications are dropped, confirmations decline.
#[cfg(wasm)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

#[cfg(wasm)]
impl Notifier for BrowserDialogs {
	fn alert(&self, message: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(message);
		}
	}
}

#[cfg(wasm)]
impl Confirmer for BrowserDialogs {
	fn confirm(&self, message: &str) -> bool {
		web_sys::window()
			.and_then(|window| window.confirm_with_message(message).ok())
			.unwrap_or(false)
	}
}

/// One-shot timers backed by `setTimeout`.
#[cfg(wasm)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(wasm)]
impl Scheduler for BrowserScheduler {
	fn delay(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
		gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
	}
}
