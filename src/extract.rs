//! Video ID extraction from free-form URLs.
//!
//! Recognizes the shapes a YouTube link shows up in when pasted by a user:
//! `youtu.be/<id>`, `youtube.com/watch?v=<id>`, `youtube.com/v/<id>` and
//! `youtube-nocookie.com/v/<id>`, with or without scheme or subdomain,
//! case-insensitively. Input is treated as raw text: a candidate that is
//! already wrapped in anchor markup is skipped, so running the extractor
//! over mixed prose finds only un-linked video references.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validate a raw string as a video ID: exactly 11 characters from
    /// `[A-Za-z0-9_-]`.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        if raw.len() == 11 && raw.bytes().all(is_id_byte) {
            Some(Self(raw.to_owned()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Host/path markers an ID can follow. The `regex` crate has no lookahead,
/// so the exact-length and not-pre-linked checks run per candidate in
/// [`video_id`] instead of inside the pattern.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?ix)
        (?:https?://)?
        (?:[0-9a-z-]+\.)*
        (?:
            youtu\.be/
          | youtube\.com/watch\?(?:[^\s'"<>&]*&)*v=
          | youtube(?:-nocookie)?\.com/v/
        )
        ([0-9a-z_-]{11})
        "#,
    )
    .unwrap()
});

/// Matches when the text after a candidate (past any remaining URL
/// characters) closes a start tag or an `<a>` element, i.e. the link was
/// already rendered as markup.
static PRE_LINKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^[?=&+%\w.-]*(?:['"][^<>]*>|</a>)"#).unwrap());

/// Extract the first video ID found in `input`.
///
/// The ID must be terminated by a non-identifier character or the end of
/// the input; trailing query parameters are discarded. Returns `None` when
/// nothing in the input looks like a video link.
///
/// ```
/// use ytembed::extract::video_id;
///
/// let id = video_id("http://www.youtube.com/v/ZU6zDg3oYH4&hl=en_US&fs=1&").unwrap();
/// assert_eq!(id.as_str(), "ZU6zDg3oYH4");
/// assert!(video_id("https://example.com/watch?v=nope").is_none());
/// ```
#[must_use]
pub fn video_id(input: &str) -> Option<VideoId> {
    for caps in MARKER.captures_iter(input) {
        let Some(id) = caps.get(1) else { continue };
        let rest = &input[id.end()..];

        // A longer identifier-like run is not an 11-character ID.
        if rest.bytes().next().is_some_and(is_id_byte) {
            continue;
        }
        if PRE_LINKED.is_match(rest) {
            continue;
        }
        return VideoId::new(id.as_str());
    }
    None
}

/// Historical query-string strategy.
///
/// An earlier revision extracted the ID from the parsed query string.
/// That path requires a scheme, misses the `/v/` and `youtu.be` shapes,
/// and disagreed with the pattern-based extractor often enough that the
/// two were never safe to fall back between. Kept only for callers that
/// depend on the old behavior; nothing in this crate calls it.
#[deprecated(note = "use `video_id`; this strategy misses /v/ and youtu.be shapes")]
#[must_use]
pub fn video_id_from_query(input: &str) -> Option<VideoId> {
    let parsed = url::Url::parse(input).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    if host == "youtu.be" || host.ends_with(".youtu.be") {
        return VideoId::new(parsed.path().trim_start_matches('/'));
    }
    if !(host == "youtube.com" || host.ends_with(".youtube.com")) {
        return None;
    }
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .and_then(|(_, value)| VideoId::new(&value))
}
