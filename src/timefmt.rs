//! Relative and absolute timestamp formatting for the timeline.
//!
//! Phrasing follows the Chirper pages: elapsed time is bucketed into
//! seconds, minutes, hours, and days, and anything a week old or older is
//! shown as an absolute date. Buckets are half-open on the lower bound, so
//! exactly 60 seconds already reads as minutes.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// A timestamp prepared for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTimestamp(DateTime<Utc>);

impl DisplayTimestamp {
	pub fn new(timestamp: DateTime<Utc>) -> Self {
		Self(timestamp)
	}

	pub fn timestamp(&self) -> DateTime<Utc> {
		self.0
	}

	/// Formats the age of this timestamp relative to `now`.
	///
	/// Timestamps in the future clamp to zero elapsed seconds.
	pub fn to_relative(&self, now: DateTime<Utc>) -> String {
		let elapsed = (now - self.0).num_seconds().max(0);

		if elapsed < MINUTE {
			format!("{elapsed}秒前")
		} else if elapsed < HOUR {
			format!("{}分前", elapsed / MINUTE)
		} else if elapsed < DAY {
			format!("{}時間前", elapsed / HOUR)
		} else if elapsed < WEEK {
			format!("{}日前", elapsed / DAY)
		} else {
			self.0.format("%Y/%-m/%-d").to_string()
		}
	}

	/// Formats the full timestamp, e.g. `2025年12月23日 14:30`.
	pub fn to_absolute(&self) -> String {
		self.0.format("%Y年%-m月%-d日 %-H:%M").to_string()
	}
}

/// Formats the age of `then` relative to `now`.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
	DisplayTimestamp::new(then).to_relative(now)
}
