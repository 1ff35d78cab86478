//! intervai CLI: practice interview answers and review your history.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "intervai", version, about = "Interview practice with answer scoring")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List questions in the bank
    Questions {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Score a single answer
    Analyze {
        /// Question ID
        #[arg(long)]
        question: u32,

        /// Answer text (reads stdin when neither --answer nor --file is given)
        #[arg(long, conflicts_with = "file")]
        answer: Option<String>,

        /// Read the answer from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run a practice session, reading one answer per line from stdin
    Practice {
        /// Category to draw questions from
        #[arg(long, default_value = "All")]
        category: String,

        /// Number of questions (defaults to the configured value)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for question selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List past sessions
    History {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show one session in detail
    Show {
        /// Session ID or its last six characters
        id: String,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Delete all stored sessions
    Clear,

    /// Validate a question bank TOML file
    Validate {
        /// Path to the question bank file
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create a starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intervai=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Questions { category } => commands::questions::execute(category, config),
        Commands::Analyze {
            question,
            answer,
            file,
            format,
        } => commands::analyze::execute(question, answer, file, format, config),
        Commands::Practice {
            category,
            count,
            seed,
        } => commands::practice::execute(category, count, seed, config),
        Commands::History { format } => commands::history::execute(format, config),
        Commands::Show { id, format } => commands::show::execute(id, format, config),
        Commands::Clear => commands::clear::execute(config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
