//! headfake CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "headfake", version, about = "Guess which headline is the fake")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session of real-or-fake headlines
    Play {
        /// Headlines to fetch per side
        #[arg(long)]
        bank_size: Option<u32>,

        /// Listing sort for live sources (hot, new, top, rising, controversial)
        #[arg(long)]
        sort: Option<String>,

        /// Named source from the config file
        #[arg(long)]
        source: Option<String>,

        /// Play against a bank file instead of a configured source
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Disable audio feedback
        #[arg(long)]
        mute: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Fetch one feed and print what the game would show
    Fetch {
        /// Which feed to fetch: real or fake
        #[arg(long, default_value = "real")]
        kind: String,

        /// Maximum number of headlines
        #[arg(long)]
        limit: Option<u32>,

        /// Listing sort for live sources
        #[arg(long)]
        sort: Option<String>,

        /// Named source from the config file
        #[arg(long)]
        source: Option<String>,

        /// Fetch from a bank file instead of a configured source
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate headline bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create a starter config and headline bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("headfake=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            bank_size,
            sort,
            source,
            bank,
            mute,
            config,
        } => commands::play::execute(bank_size, sort, source, bank, mute, config).await,
        Commands::Fetch {
            kind,
            limit,
            sort,
            source,
            bank,
            config,
        } => commands::fetch::execute(kind, limit, sort, source, bank, config).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
