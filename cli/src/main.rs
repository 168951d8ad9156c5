mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{apportion, divide, simulate};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Simulate(args) => simulate::run(&cli, args),
        Commands::Divide(args) => divide::run(&cli, args),
        Commands::Apportion(args) => apportion::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
