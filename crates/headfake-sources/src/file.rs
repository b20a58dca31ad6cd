//! Local bank file source.
//!
//! Serves a parsed TOML headline bank so the game can run offline.

use std::path::Path;

use async_trait::async_trait;

use headfake_core::bank::{parse_bank, HeadlineBank};
use headfake_core::model::{BatchKind, GameSettings};
use headfake_core::traits::{HeadlineSource, RawHeadline};

/// Headline source backed by a bank file instead of a live feed.
pub struct FileSource {
    bank: HeadlineBank,
}

impl FileSource {
    /// Parse the bank at `path`.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let bank = parse_bank(path)?;
        tracing::info!(
            bank = %bank.name,
            real = bank.real.len(),
            fake = bank.fake.len(),
            path = %path.display(),
            "loaded headline bank"
        );
        Ok(Self { bank })
    }

    pub fn from_bank(bank: HeadlineBank) -> Self {
        Self { bank }
    }
}

#[async_trait]
impl HeadlineSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(
        &self,
        kind: BatchKind,
        settings: &GameSettings,
    ) -> anyhow::Result<Vec<RawHeadline>> {
        // Bank entries have no listing sort; file order stands in for it.
        tracing::debug!(sort_by = %settings.sort_by, "sort ignored for bank files");

        let mut items = self.bank.entries(kind).to_vec();
        items.truncate(settings.bank_size as usize);
        Ok(items)
    }
}
