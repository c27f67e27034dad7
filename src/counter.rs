//! Character counter state for the tweet textarea.
//!
//! The counter itself is derived state: it is recomputed from the live input
//! length on every input event and never stored. This module holds the pure
//! part of that computation; the DOM wiring lives in `behaviors::counter`.

/// Presentation state of the character counter.
///
/// The three levels are mutually exclusive. `Danger` takes precedence over
/// `Warning`, and `Neutral` is restored as soon as the length drops back
/// under 90% of the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
	/// Under 90% of the limit. No extra class on the counter element.
	Neutral,
	/// Over 90% of the limit but still within it.
	Warning,
	/// Over the limit.
	Danger,
}

impl CounterLevel {
	/// Classifies a length against a limit.
	///
	/// `len` and `max_chars` are both counted in Unicode scalar values. The
	/// warning threshold is strictly-greater-than 90% of the limit, so for
	/// the default limit of 140 the warning band is 127..=140.
	pub fn for_length(len: usize, max_chars: usize) -> Self {
		if len > max_chars {
			Self::Danger
		} else if len * 10 > max_chars * 9 {
			Self::Warning
		} else {
			Self::Neutral
		}
	}

	/// The CSS class carried by this level, if any.
	pub fn css_class(self) -> Option<&'static str> {
		match self {
			Self::Neutral => None,
			Self::Warning => Some("warning"),
			Self::Danger => Some("danger"),
		}
	}
}

/// Renders the counter label text, e.g. `"5 / 140"`.
pub fn counter_label(len: usize, max_chars: usize) -> String {
	format!("{len} / {max_chars}")
}
