use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod runner;
mod sampler;
mod util;

#[derive(Parser)]
#[command(name = "csvprobe", version)]
#[command(about = "Feed a random CSV sample to a target executable", long_about = None)]
struct Cli {
    /// Dataset CSV path (second column is sampled; overrides config)
    dataset: Option<String>,

    /// Target executable path (overrides config)
    executable: Option<String>,

    /// Path to config file (defaults to ./csvprobe.toml or ~/.config/csvprobe/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Override execution timeout in seconds (default: from config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Fixed RNG seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    cli::run::run(cli.dataset, cli.executable, cli.config, cli.timeout, cli.seed)
}
