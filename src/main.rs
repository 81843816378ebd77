use anyhow::Result;
use clap::{Parser, Subcommand};
use ytlaunch::commands;

#[derive(Parser)]
#[command(name = "ytlaunch", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a video in the preferred player
    #[command(alias = "o")]
    Open {
        /// YouTube URL, Short Link, or Video ID. Prompts when omitted.
        input: Option<String>,

        /// Print the URL instead of opening it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the canonical URL for an input
    #[command(alias = "n")]
    Normalize {
        /// YouTube URL, Short Link, or Video ID
        input: String,

        /// Only accept youtube.com, youtu.be and their subdomains
        #[arg(long)]
        strict: bool,
    },

    /// Set a config value (host_policy, handlers)
    Config { key: String, value: String },

    /// Show config location and effective settings
    Info,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Open { input, dry_run } => commands::open(input.as_deref(), dry_run),
        Commands::Normalize { input, strict } => commands::normalize(&input, strict),
        Commands::Config { key, value } => commands::config(&key, &value),
        Commands::Info => commands::info(),
    }
}
