//! Source configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use headfake_core::model::GameSettings;
use headfake_core::traits::HeadlineSource;

use crate::file::FileSource;
use crate::reddit::RedditSource;

/// Configuration for a single headline source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Reddit {
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        user_agent: Option<String>,
        #[serde(default = "default_real_subreddit")]
        real_subreddit: String,
        #[serde(default = "default_fake_subreddit")]
        fake_subreddit: String,
    },
    File {
        path: PathBuf,
    },
}

fn default_real_subreddit() -> String {
    "nottheonion".to_string()
}

fn default_fake_subreddit() -> String {
    "TheOnion".to_string()
}

/// Top-level headfake configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadfakeConfig {
    /// Source configurations keyed by name.
    #[serde(default)]
    pub sources: HashMap<String, SourceConfig>,
    /// Default source to play against.
    #[serde(default = "default_source_name")]
    pub default_source: String,
    /// Default game settings.
    #[serde(default)]
    pub game: GameSettings,
}

fn default_source_name() -> String {
    "reddit".to_string()
}

impl Default for HeadfakeConfig {
    fn default() -> Self {
        let mut sources = HashMap::new();
        sources.insert(
            "reddit".to_string(),
            SourceConfig::Reddit {
                base_url: None,
                user_agent: None,
                real_subreddit: default_real_subreddit(),
                fake_subreddit: default_fake_subreddit(),
            },
        );
        Self {
            sources,
            default_source: default_source_name(),
            game: GameSettings::default(),
        }
    }
}

impl HeadfakeConfig {
    /// Look up a source by name, listing the available names on a miss.
    pub fn source(&self, name: &str) -> Result<&SourceConfig> {
        self.sources.get(name).ok_or_else(|| {
            let mut names: Vec<_> = self.sources.keys().cloned().collect();
            names.sort();
            anyhow::anyhow!("unknown source '{name}' (available: {})", names.join(", "))
        })
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `headfake.toml` in the current directory
/// 2. `~/.config/headfake/config.toml`
///
/// Environment variable override: `HEADFAKE_USER_AGENT` replaces the
/// User-Agent of every reddit source.
pub fn load_config() -> Result<HeadfakeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<HeadfakeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("headfake.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<HeadfakeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => HeadfakeConfig::default(),
    };

    // Apply env var overrides
    if let Ok(ua) = std::env::var("HEADFAKE_USER_AGENT") {
        for source in config.sources.values_mut() {
            if let SourceConfig::Reddit { user_agent, .. } = source {
                *user_agent = Some(ua.clone());
            }
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("headfake"))
}

/// Create a source instance from its configuration.
pub fn create_source(name: &str, config: &SourceConfig) -> Result<Arc<dyn HeadlineSource>> {
    match config {
        SourceConfig::Reddit {
            base_url,
            user_agent,
            real_subreddit,
            fake_subreddit,
        } => Ok(Arc::new(RedditSource::new(
            base_url.clone(),
            user_agent.clone(),
            real_subreddit,
            fake_subreddit,
        ))),
        SourceConfig::File { path } => {
            let source = FileSource::open(path)
                .with_context(|| format!("opening bank for source '{name}'"))?;
            Ok(Arc::new(source))
        }
    }
}
