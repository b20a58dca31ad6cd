//! Subcommand implementations.

pub mod fetch;
pub mod init;
pub mod play;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use headfake_core::traits::HeadlineSource;
use headfake_sources::file::FileSource;
use headfake_sources::reddit::LISTING_SORTS;
use headfake_sources::{create_source, HeadfakeConfig};

/// Resolve the headline source for a command.
///
/// An explicit `--bank` file wins, then a named `--source`, then the
/// config's default. Returns a display label alongside the source.
pub fn resolve_source(
    config: &HeadfakeConfig,
    source_name: Option<&str>,
    bank: Option<&Path>,
) -> Result<(String, Arc<dyn HeadlineSource>)> {
    if let Some(path) = bank {
        let source = FileSource::open(path)
            .with_context(|| format!("opening bank {}", path.display()))?;
        return Ok((path.display().to_string(), Arc::new(source)));
    }
    let name = source_name.unwrap_or(&config.default_source);
    let source = create_source(name, config.source(name)?)?;
    Ok((name.to_string(), source))
}

/// Reject sorts the reddit listing endpoints do not know about.
pub fn check_sort(sort: &str) -> Result<()> {
    anyhow::ensure!(
        LISTING_SORTS.contains(&sort),
        "unknown sort '{sort}' (expected one of: {})",
        LISTING_SORTS.join(", ")
    );
    Ok(())
}
