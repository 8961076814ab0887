use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobwatch_core::AppConfig;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(author, version, about = "Job and fellowship postings from RSS feeds, filtered by salary and keywords")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/jobwatch/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all feeds once and print the matching postings
    Search(SearchArgs),
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Default)]
pub struct SearchArgs {
    /// Minimum salary in GBP (overrides [filter] min_salary)
    #[arg(short = 'm', long)]
    pub min_salary: Option<u64>,

    /// Focus keywords separated by commas or newlines (overrides [filter] keywords; "" matches everything)
    #[arg(short = 'k', long)]
    pub keywords: Option<String>,

    /// Extra job feed URLs, one per line
    #[arg(short = 'e', long)]
    pub extra_feeds: Option<String>,

    /// Extra job feed URL (repeatable)
    #[arg(short = 'f', long = "feed")]
    pub feeds: Vec<String>,

    /// Extra course/fellowship feed URL (repeatable)
    #[arg(long = "course-feed")]
    pub course_feeds: Vec<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!("Configuration: {}", config_path.display());

    match cli.command {
        Some(Commands::Search(args)) => commands::search::run(&config, args).await,
        None => commands::search::run(&config, SearchArgs::default()).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}
