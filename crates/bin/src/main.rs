use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(semisort::constants::LOG_DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    match &cli.command {
        Commands::Sort(args) => commands::sort::run(args, format),
        Commands::Rank(args) => commands::rank::run(args, format),
        Commands::Generate(args) => commands::generate::run(args, format),
    }
}
