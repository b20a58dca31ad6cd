//! The `headfake fetch` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use headfake_core::model::{BatchKind, HeadlineItem};
use headfake_sources::config::load_config_from;

use super::{check_sort, resolve_source};

pub async fn execute(
    kind_str: String,
    limit: Option<u32>,
    sort: Option<String>,
    source_name: Option<String>,
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let kind: BatchKind = kind_str
        .trim()
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    if let Some(sort) = &sort {
        check_sort(sort)?;
    }
    if let Some(limit) = limit {
        anyhow::ensure!(limit >= 1, "limit must be at least 1");
    }

    let config = load_config_from(config_path.as_deref())?;
    let mut settings = config.game.clone();
    if let Some(limit) = limit {
        settings.bank_size = limit;
    }
    if let Some(sort) = sort {
        settings.sort_by = sort;
    }

    let (label, source) = resolve_source(&config, source_name.as_deref(), bank.as_deref())?;

    let headlines = source.fetch(kind, &settings).await?;
    eprintln!("{} {kind} headlines from '{label}'", headlines.len());

    let mut table = Table::new();
    table.set_header(vec!["#", "Title", "Thumbnail"]);
    for (i, raw) in headlines.iter().enumerate() {
        let item = HeadlineItem::from_raw(raw);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&item.text),
            Cell::new(&item.thumbnail_url),
        ]);
    }
    println!("{table}");

    Ok(())
}
