//! Terminal audio feedback.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;

use headfake_core::traits::{AudioSurface, Cue};

const CHIME_GAP: Duration = Duration::from_millis(120);

/// Number of bell rings for a cue: one for a hit, two for a miss.
fn chimes(cue: Cue) -> u32 {
    match cue {
        Cue::Ding => 1,
        Cue::Buzz => 2,
    }
}

/// Plays cues as terminal bell characters.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl TerminalBell {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioSurface for TerminalBell {
    async fn preload(&self, cue: Cue, asset_path: &str) -> anyhow::Result<()> {
        // The bell has no assets to stage.
        tracing::debug!(?cue, asset_path, "preload is a no-op for the terminal bell");
        Ok(())
    }

    async fn play(&self, cue: Cue) -> anyhow::Result<()> {
        for i in 0..chimes(cue) {
            if i > 0 {
                tokio::time::sleep(CHIME_GAP).await;
            }
            let mut stderr = std::io::stderr();
            stderr.write_all(b"\x07")?;
            stderr.flush()?;
        }
        Ok(())
    }
}

/// Discards every cue, for `--mute`.
#[derive(Debug, Default)]
pub struct Silent;

impl Silent {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioSurface for Silent {
    async fn preload(&self, _cue: Cue, _asset_path: &str) -> anyhow::Result<()> {
        Ok(())
    }

    async fn play(&self, _cue: Cue) -> anyhow::Result<()> {
        Ok(())
    }
}
