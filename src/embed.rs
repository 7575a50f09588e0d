//! Embed URL and iframe markup assembly.
//!
//! Pure string building. The element shape and single-quoted attribute
//! syntax are a compatibility contract: downstream templates compare this
//! output byte-for-byte.

use crate::extract::VideoId;

/// Base of every embed URL; the video ID is appended directly.
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Player parameters applied when the caller supplies none. Passed through
/// verbatim, separators included.
pub const DEFAULT_PLAYER_PARAMS: &str = "modestbranding=1;controls=1;showinfo=0;rel=0;fs=1";

/// One HTML attribute: a `name='value'` pair or a bare boolean token such
/// as `allowfullscreen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    Pair(String, String),
    Bare(String),
}

impl Attr {
    #[must_use]
    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Pair(name.into(), value.into())
    }

    #[must_use]
    pub fn bare(token: impl Into<String>) -> Self {
        Self::Bare(token.into())
    }

    fn name(&self) -> Option<&str> {
        match self {
            Self::Pair(name, _) => Some(name),
            Self::Bare(_) => None,
        }
    }
}

/// Attributes every embed starts from.
fn default_attributes() -> Vec<Attr> {
    vec![Attr::pair("frameborder", "0"), Attr::bare("allowfullscreen")]
}

/// Overlay `extra` onto `defaults`: a pair replaces a same-named default in
/// place, everything else appends in caller order. Caller wins on name
/// collision. Bare tokens never collide.
#[must_use]
pub fn merge_attributes(defaults: Vec<Attr>, extra: &[Attr]) -> Vec<Attr> {
    let mut merged = defaults;
    for attr in extra {
        let existing = attr
            .name()
            .and_then(|name| merged.iter().position(|m| m.name() == Some(name)));
        match existing {
            Some(i) => merged[i] = attr.clone(),
            None => merged.push(attr.clone()),
        }
    }
    merged
}

/// Render attributes: single-quoted values, bare tokens verbatim, joined
/// with single spaces.
#[must_use]
pub fn format_attributes(attrs: &[Attr]) -> String {
    attrs
        .iter()
        .map(|attr| match attr {
            Attr::Pair(name, value) => format!("{name}='{value}'"),
            Attr::Bare(token) => token.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Embed URL for a video. `params` is appended after `?` when non-empty,
/// byte-exact and never re-sorted.
#[must_use]
pub fn embed_url(id: &VideoId, params: &str) -> String {
    if params.is_empty() {
        format!("{EMBED_BASE}{id}")
    } else {
        format!("{EMBED_BASE}{id}?{params}")
    }
}

/// Full iframe markup for a video: default attributes overlaid with
/// `extra` (caller wins), `class` from `css_classes`, `src` from
/// [`embed_url`].
#[must_use]
pub fn iframe(id: &VideoId, css_classes: &str, extra: &[Attr], params: &str) -> String {
    let src = embed_url(id, params);
    let attrs = format_attributes(&merge_attributes(default_attributes(), extra));
    format!("<iframe class='{css_classes}' src='{src}' {attrs}></iframe>")
}
