//! Vocahangman - CLI
//!
//! Educators add words with synonyms; students guess the words hangman-style.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;
use vocahangman::{
    commands::{list_scores, list_words, run_educator, run_menu, run_student},
    config::{DEFAULT_PACE_MS, Settings},
    interactive::Terminal,
    logging::init_tracing,
    store::FileStore,
};

#[derive(Parser)]
#[command(
    name = "vocahangman",
    about = "Vocabulary hangman for educators and students",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding words.json and scores.json (default: platform data dir)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Pause between game steps in milliseconds, 0 to disable
    #[arg(short, long, global = true, default_value_t = DEFAULT_PACE_MS)]
    pace_ms: u64,

    /// Seed for word selection, for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Role menu: Educator, Student or Quit (default)
    Menu,

    /// Add and edit vocabulary words
    Educator,

    /// Play rounds and review your scores
    Student,

    /// List the vocabulary
    Words,

    /// Show score history
    Scores {
        /// Student to show; omit for a summary of everyone
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::new(cli.data_dir, cli.pace_ms, cli.seed);
    info!(data_dir = %settings.data_dir.display(), "using data directory");

    let mut store = FileStore::new(&settings.data_dir);
    let mut io = Terminal::stdio(settings.pace);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to the role menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);

    let result = match command {
        Commands::Menu => run_menu(&mut store, &mut io, &mut rng),
        Commands::Educator => run_educator(&mut store, &mut io),
        Commands::Student => run_student(&mut store, &mut io, &mut rng),
        Commands::Words => list_words(&mut store, &mut io),
        Commands::Scores { name } => list_scores(&mut store, &mut io, name.as_deref()),
    };
    result.with_context(|| format!("data directory: {}", settings.data_dir.display()))
}
