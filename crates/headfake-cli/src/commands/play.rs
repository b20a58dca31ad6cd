//! The `headfake play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use comfy_table::{Cell, Table};

use headfake_console::{ConsoleNotifier, Silent, TerminalBell};
use headfake_core::model::Side;
use headfake_core::session::GameSession;
use headfake_core::traits::{AudioSurface, Notifier};
use headfake_sources::config::load_config_from;

use super::{check_sort, resolve_source};

pub async fn execute(
    bank_size: Option<u32>,
    sort: Option<String>,
    source_name: Option<String>,
    bank: Option<PathBuf>,
    mute: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Validate inputs
    if let Some(sort) = &sort {
        check_sort(sort)?;
    }
    if let Some(size) = bank_size {
        anyhow::ensure!(size >= 1, "bank size must be at least 1");
    }

    // Load config and fold in flag overrides
    let config = load_config_from(config_path.as_deref())?;
    let mut settings = config.game.clone();
    if let Some(size) = bank_size {
        settings.bank_size = size;
    }
    if let Some(sort) = sort {
        settings.sort_by = sort;
    }

    let (label, source) = resolve_source(&config, source_name.as_deref(), bank.as_deref())?;
    tracing::debug!(source = %label, mute, "starting play");

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new());
    let audio: Arc<dyn AudioSurface> = if mute {
        Arc::new(Silent::new())
    } else {
        Arc::new(TerminalBell::new())
    };

    eprintln!(
        "headfake v0.1.0 :: up to {} rounds from '{label}'",
        settings.bank_size
    );

    let mut session = GameSession::begin(source, settings, notifier, audio).await?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        let Some(pair) = session.current_pair() else {
            break;
        };
        let round = session.rounds().len() + 1;
        println!();
        println!("Round {round}");
        println!("  [1] {}", pair.left.text);
        println!("  [2] {}", pair.right.text);
        print!("Which is the fake? (1/2, q quits) ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed, treat like a quit
            println!();
            break;
        };
        let side = match line?.trim() {
            "1" => Side::Left,
            "2" => Side::Right,
            "q" | "quit" => break,
            other => {
                println!("'{other}'? Enter 1, 2, or q.");
                continue;
            }
        };

        if let Some(result) = session.submit_guess(side) {
            println!(
                "Score: {}/{} ({})",
                result.score.correct, result.score.guessed, result.percentage_display
            );
        }
    }

    print_summary(&session);
    Ok(())
}

fn print_summary(session: &GameSession) {
    let rounds = session.rounds();
    if rounds.is_empty() {
        println!("No guesses made.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Round", "Fake headline", "Your pick", "Result", "Accuracy"]);

    for (i, round) in rounds.iter().enumerate() {
        let outcome = if round.correct { "hit" } else { "miss" };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(truncate(&round.pair.fake().text, 48)),
            Cell::new(round.guessed_side),
            Cell::new(outcome),
            Cell::new(&round.percentage_display),
        ]);
    }

    let score = session.score();
    println!("\n{table}");
    println!(
        "Final score: {}/{} ({})",
        score.correct,
        score.guessed,
        score.percentage_display()
    );
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{cut}...")
    }
}
