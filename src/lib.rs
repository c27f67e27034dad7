//! Client-side UI behaviors for the Chirper pages.
//!
//! The Chirper frontend is server-rendered; this crate ships the small WASM
//! bundle that upgrades the rendered markup with client-side conveniences:
//!
//! - a live character counter on the tweet textarea,
//! - auto-dismissal of transient alert banners,
//! - submit-time tweet form validation,
//! - a confirmation dialog on unfollow buttons,
//! - an image preview for file inputs (not wired into any page yet),
//! - hashtag/mention/URL highlighting and relative-time formatting.
//!
//! ## Architecture
//!
//! The crate splits into a pure core and a thin DOM layer:
//!
//! - [`counter`], [`validation`], [`content`], [`timefmt`], [`config`] are
//!   target-independent and unit-tested natively.
//! - `behaviors` (WASM only) wires the core to the DOM through `web-sys`.
//!   Each behavior attaches independently and tolerates absent target
//!   elements as a silent no-op.
//! - [`capabilities`] abstracts the blocking browser dialogs and the one-shot
//!   timer so behaviors can be exercised with deterministic fakes.
//!
//! Client-side validation here is UX only and never replaces the server-side
//! checks.

pub mod capabilities;
pub mod config;
pub mod content;
pub mod counter;
pub mod logging;
pub mod timefmt;
pub mod validation;

#[cfg(wasm)]
pub mod behaviors;

pub use config::{Messages, UiConfig};
pub use content::{TweetText, escape_html, highlight_hashtags_and_mentions};
pub use counter::{CounterLevel, counter_label};
pub use timefmt::{DisplayTimestamp, format_relative_time};
pub use validation::{FieldError, ValidationReport, validate_tweet};

#[cfg(wasm)]
pub use behaviors::{UiBehaviors, init_ui_behaviors};
