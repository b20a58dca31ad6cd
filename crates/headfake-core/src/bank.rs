//! TOML headline bank parser.
//!
//! Banks are an offline headline supply: a named pair of real/fake entry
//! lists that the file source serves instead of a live feed.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::BatchKind;
use crate::traits::RawHeadline;

/// A parsed headline bank.
#[derive(Debug, Clone)]
pub struct HeadlineBank {
    /// Human-readable bank name.
    pub name: String,
    /// Description of where the headlines came from.
    pub description: String,
    /// Real headlines, in file order.
    pub real: Vec<RawHeadline>,
    /// Fake headlines, in file order.
    pub fake: Vec<RawHeadline>,
}

impl HeadlineBank {
    /// Entries for one side of the game.
    pub fn entries(&self, kind: BatchKind) -> &[RawHeadline] {
        match kind {
            BatchKind::Real => &self.real,
            BatchKind::Fake => &self.fake,
        }
    }
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    real: Vec<TomlBankEntry>,
    #[serde(default)]
    fake: Vec<TomlBankEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlBankEntry {
    title: String,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl TomlBankEntry {
    fn into_raw(self) -> RawHeadline {
        RawHeadline {
            title: self.title,
            thumbnail_url: self.thumbnail.unwrap_or_default(),
        }
    }
}

/// Parse a single TOML file into a `HeadlineBank`.
pub fn parse_bank(path: &Path) -> Result<HeadlineBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `HeadlineBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<HeadlineBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(HeadlineBank {
        name: parsed.bank.name,
        description: parsed.bank.description,
        real: parsed.real.into_iter().map(TomlBankEntry::into_raw).collect(),
        fake: parsed.fake.into_iter().map(TomlBankEntry::into_raw).collect(),
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<HeadlineBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The affected side (if applicable).
    pub kind: Option<BatchKind>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common issues.
///
/// None of these are fatal; a session over an uneven bank simply ends when
/// the shorter side runs out.
pub fn validate_bank(bank: &HeadlineBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for kind in [BatchKind::Real, BatchKind::Fake] {
        let entries = bank.entries(kind);

        if entries.is_empty() {
            warnings.push(ValidationWarning {
                kind: Some(kind),
                message: format!("no {kind} headlines; the game ends immediately"),
            });
        }

        for (i, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                warnings.push(ValidationWarning {
                    kind: Some(kind),
                    message: format!("{kind} entry {} has an empty title", i + 1),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for entry in entries {
            if !seen.insert(entry.title.as_str()) {
                warnings.push(ValidationWarning {
                    kind: Some(kind),
                    message: format!("duplicate {kind} title: {}", entry.title),
                });
            }
        }
    }

    if bank.real.len() != bank.fake.len() {
        warnings.push(ValidationWarning {
            kind: None,
            message: format!(
                "uneven sides ({} real, {} fake); play ends after {} rounds",
                bank.real.len(),
                bank.fake.len(),
                bank.real.len().min(bank.fake.len())
            ),
        });
    }

    warnings
}
