//! Tweet content parsing and safe HTML highlighting.
//!
//! [`TweetText`] extracts `@mention`, `#hashtag`, and URL tokens with their
//! byte positions, and renders the content as HTML with each token turned
//! into an anchor. All raw text, including the captured tokens themselves,
//! is HTML-escaped during rendering, so the output is safe to insert into
//! the page even when the source text is user-supplied.

use std::sync::LazyLock;

use regex::Regex;

static MENTION_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_]+)").expect("mention pattern compiles"));
static HASHTAG_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"#([\p{L}\p{N}_]+)").expect("hashtag pattern compiles"));
static URL_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern compiles"));

/// An `@mention` token and its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
	pub username: String,
	pub start: usize,
	pub end: usize,
}

/// A `#hashtag` token and its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashtag {
	pub tag: String,
	pub start: usize,
	pub end: usize,
}

/// A URL token and its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSpan {
	pub url: String,
	pub start: usize,
	pub end: usize,
}

/// Tweet text with its extracted entities.
#[derive(Debug, Clone)]
pub struct TweetText {
	raw: String,
	mentions: Vec<Mention>,
	hashtags: Vec<Hashtag>,
	urls: Vec<UrlSpan>,
}

impl TweetText {
	/// Parses text and extracts all entities. Never fails; text without
	/// entities simply has empty entity lists.
	pub fn parse(text: &str) -> Self {
		let mentions = MENTION_RE
			.captures_iter(text)
			.map(|c| {
				let whole = c.get(0).expect("capture 0 always present");
				Mention {
					username: c[1].to_string(),
					start: whole.start(),
					end: whole.end(),
				}
			})
			.collect();
		let hashtags = HASHTAG_RE
			.captures_iter(text)
			.map(|c| {
				let whole = c.get(0).expect("capture 0 always present");
				Hashtag {
					tag: c[1].to_string(),
					start: whole.start(),
					end: whole.end(),
				}
			})
			.collect();
		let urls = URL_RE
			.find_iter(text)
			.map(|m| UrlSpan {
				url: m.as_str().to_string(),
				start: m.start(),
				end: m.end(),
			})
			.collect();

		Self {
			raw: text.to_string(),
			mentions,
			hashtags,
			urls,
		}
	}

	pub fn raw(&self) -> &str {
		&self.raw
	}

	pub fn mentions(&self) -> &[Mention] {
		&self.mentions
	}

	pub fn hashtags(&self) -> &[Hashtag] {
		&self.hashtags
	}

	pub fn urls(&self) -> &[UrlSpan] {
		&self.urls
	}

	/// Renders the text as HTML with entities linked.
	///
	/// - hashtags become `<a href="/search?q=%23{tag}" class="hashtag">`
	/// - mentions become `<a href="/profile/{username}" class="mention">`
	/// - URLs become `<a href="{url}" target="_blank" rel="noopener">`
	///
	/// Entities are emitted in position order. When spans overlap (a `#` or
	/// `@` token inside a matched URL), the earlier span wins, so the URL
	/// stays one link.
	pub fn to_highlighted_html(&self) -> String {
		enum Entity<'a> {
			Mention(&'a Mention),
			Hashtag(&'a Hashtag),
			Url(&'a UrlSpan),
		}

		let mut entities: Vec<(usize, usize, Entity)> = Vec::new();
		// URLs first so that on equal start positions the URL is kept.
		entities.extend(self.urls.iter().map(|u| (u.start, u.end, Entity::Url(u))));
		entities.extend(
			self.mentions
				.iter()
				.map(|m| (m.start, m.end, Entity::Mention(m))),
		);
		entities.extend(
			self.hashtags
				.iter()
				.map(|h| (h.start, h.end, Entity::Hashtag(h))),
		);
		entities.sort_by_key(|(start, end, _)| (*start, usize::MAX - *end));

		let mut html = String::with_capacity(self.raw.len());
		let mut cursor = 0;

		for (start, end, entity) in entities {
			if start < cursor {
				// Nested inside an already-rendered span.
				continue;
			}
			html.push_str(&escape_html(&self.raw[cursor..start]));
			match entity {
				Entity::Mention(m) => {
					let username = escape_html(&m.username);
					html.push_str(&format!(
						r#"<a href="/profile/{username}" class="mention">@{username}</a>"#
					));
				}
				Entity::Hashtag(h) => {
					let tag = escape_html(&h.tag);
					let query = urlencoding::encode(&h.tag);
					html.push_str(&format!(
						r##"<a href="/search?q=%23{query}" class="hashtag">#{tag}</a>"##
					));
				}
				Entity::Url(u) => {
					let url = escape_html(&u.url);
					html.push_str(&format!(
						r#"<a href="{url}" target="_blank" rel="noopener">{url}</a>"#
					));
				}
			}
			cursor = end;
		}

		html.push_str(&escape_html(&self.raw[cursor..]));
		html
	}
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			other => escaped.push(other),
		}
	}
	escaped
}

/// Links hashtags and mentions in `text`, escaping everything else.
///
/// Convenience wrapper over [`TweetText::to_highlighted_html`]. The input
/// is escaped during substitution, so callers may pass untrusted text
/// directly.
pub fn highlight_hashtags_and_mentions(text: &str) -> String {
	TweetText::parse(text).to_highlighted_html()
}
