//! Core data model types for headfake.
//!
//! These are the fundamental types that the entire headfake system uses
//! to represent headlines, display pairs, and per-session settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::traits::{normalize_title, RawHeadline};

/// Thumbnail shown when a feed item carries no usable image URL.
///
/// Reddit fills the `thumbnail` field with markers like `"self"` or
/// `"default"` for text posts, so anything that is not an http(s) URL is
/// replaced with this generic newspaper icon.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://image.flaticon.com/icons/svg/0/838.svg";

/// A single headline ready for display.
///
/// Immutable once created; `text` has already been case-normalized so the
/// feed's casing conventions cannot give away which side it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineItem {
    /// Normalized headline text.
    pub text: String,
    /// Thumbnail URL, or [`PLACEHOLDER_THUMBNAIL`] when the feed had none.
    pub thumbnail_url: String,
}

impl HeadlineItem {
    /// Build a display item from a raw feed entry.
    ///
    /// Applies [`normalize_title`] to the title and substitutes the
    /// placeholder for thumbnails that are not http(s) URLs.
    pub fn from_raw(raw: &RawHeadline) -> Self {
        let thumbnail_url = if raw.thumbnail_url.starts_with("http") {
            raw.thumbnail_url.clone()
        } else {
            PLACEHOLDER_THUMBNAIL.to_string()
        };
        Self {
            text: normalize_title(&raw.title),
            thumbnail_url,
        }
    }
}

/// Which of the two feeds a batch of headlines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchKind {
    /// Genuine headlines (r/nottheonion and friends).
    Real,
    /// Satirical headlines presented as real (r/TheOnion and friends).
    Fake,
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchKind::Real => write!(f, "real"),
            BatchKind::Fake => write!(f, "fake"),
        }
    }
}

impl FromStr for BatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real" => Ok(BatchKind::Real),
            "fake" => Ok(BatchKind::Fake),
            other => Err(format!("unknown headline kind: {other}")),
        }
    }
}

/// Display position of a headline within the current pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The pair of headlines currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPair {
    /// Headline shown on the left.
    pub left: HeadlineItem,
    /// Headline shown on the right.
    pub right: HeadlineItem,
    /// Which side holds the fake headline this round.
    pub fake_side: Side,
}

impl CurrentPair {
    /// The headline displayed on the given side.
    pub fn item(&self, side: Side) -> &HeadlineItem {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// The fake headline of this pair.
    pub fn fake(&self) -> &HeadlineItem {
        self.item(self.fake_side)
    }

    /// The real headline of this pair.
    pub fn real(&self) -> &HeadlineItem {
        self.item(self.fake_side.other())
    }
}

/// Per-session settings supplied by the caller at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// How many headlines to request per feed.
    #[serde(default = "default_bank_size")]
    pub bank_size: u32,
    /// Listing sort passed through to the source (e.g. "hot", "new", "top").
    /// Opaque to the engine.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            bank_size: default_bank_size(),
            sort_by: default_sort_by(),
        }
    }
}

fn default_bank_size() -> u32 {
    25
}

fn default_sort_by() -> String {
    "hot".to_string()
}
