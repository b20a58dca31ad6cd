//! Core trait definitions for headline sources and presentation surfaces.
//!
//! These traits are implemented by the `headfake-sources` and
//! `headfake-console` crates respectively. The engine itself never performs
//! I/O; everything behind these seams is a collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::{BatchKind, GameSettings};

// ---------------------------------------------------------------------------
// Headline source trait
// ---------------------------------------------------------------------------

/// A headline as delivered by a source, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHeadline {
    /// Title exactly as the feed published it.
    pub title: String,
    /// Thumbnail URL or a feed-specific marker (e.g. reddit's "self").
    #[serde(default)]
    pub thumbnail_url: String,
}

/// Trait for backends that supply batches of headlines.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Human-readable source name (e.g. "reddit").
    fn name(&self) -> &str;

    /// Fetch one batch of headlines of the given kind.
    ///
    /// Returns up to `settings.bank_size` items in the source's relevance
    /// order; the caller appends them as-is.
    async fn fetch(
        &self,
        kind: BatchKind,
        settings: &GameSettings,
    ) -> anyhow::Result<Vec<RawHeadline>>;
}

// ---------------------------------------------------------------------------
// Notification surface
// ---------------------------------------------------------------------------

/// Where a notice is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePosition {
    Top,
    Bottom,
}

/// Trait for transient user-facing notices.
///
/// Fire-and-forget: implementations must not block the caller. The duration
/// and position are presentation hints; surfaces without an equivalent
/// concept may ignore them.
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, duration: Duration, position: NoticePosition);
}

// ---------------------------------------------------------------------------
// Audio surface
// ---------------------------------------------------------------------------

/// The two feedback sounds the game requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Correct guess.
    Ding,
    /// Incorrect guess.
    Buzz,
}

impl Cue {
    /// Fixed asset path staged at preload time.
    pub fn asset_path(self) -> &'static str {
        match self {
            Cue::Ding => "assets/sfx/ding.mp3",
            Cue::Buzz => "assets/sfx/buzz.mp3",
        }
    }
}

/// Trait for audio playback backends.
///
/// Both operations are best-effort; the session logs failures and moves on.
#[async_trait]
pub trait AudioSurface: Send + Sync {
    /// Stage a cue's asset so later playback is immediate.
    async fn preload(&self, cue: Cue, asset_path: &str) -> anyhow::Result<()>;

    /// Play a previously staged cue.
    async fn play(&self, cue: Cue) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// Title normalization
// ---------------------------------------------------------------------------

/// Normalize a feed title for display: first character preserved as-is,
/// remainder lower-cased.
///
/// Satirical feeds tend to publish in Title Case and real feeds in sentence
/// case; flattening the casing keeps it from giving the answer away.
pub fn normalize_title(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(title.len());
            out.push(first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
