//! quizrun CLI: interactive multiple-choice quiz runner.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use quizrun_core::error::QuizError;

mod bank;
mod commands;
mod config;
mod console;
mod menu;
mod render;

/// Exit status used when the user interrupts the quiz.
const EXIT_CANCELLED: i32 = 130;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Interactive multiple-choice quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz (the default when no command is given)
    Play(PlayArgs),

    /// Check a question bank file or directory for problems
    Validate {
        /// Path to a .toml/.json bank or a directory of banks (default: bundled bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Show question counts by difficulty
    Stats {
        /// Path to a .toml/.json bank or a directory of banks (default: bundled bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
pub struct PlayArgs {
    /// Path to a .toml/.json bank or a directory of banks
    #[arg(long)]
    pub bank: Option<PathBuf>,

    /// Skip the menu and start a preset run
    #[arg(long, value_enum)]
    pub preset: Option<menu::Preset>,

    /// Seed for question selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => play(args).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Stats { bank } => commands::stats::execute(bank),
    };

    if let Err(e) = result {
        if matches!(e.downcast_ref::<QuizError>(), Some(QuizError::UserCancelled)) {
            println!("\n\nQuiz cancelled. Goodbye!");
            process::exit(EXIT_CANCELLED);
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Run the interactive quiz on a blocking thread so Ctrl-C can cancel it.
async fn play(args: PlayArgs) -> Result<()> {
    let quiz = tokio::task::spawn_blocking(move || commands::play::execute(args));

    tokio::select! {
        joined = quiz => joined.context("quiz thread panicked")?,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupt received");
            Err(QuizError::UserCancelled.into())
        }
    }
}
