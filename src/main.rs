use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use recase::cli;
use recase::cli::convert::ConvertArgs;
use recase::cli::infer::InferArgs;
use recase::cli::list::ListArgs;
use recase::config::Config;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("RECASE_BUILD_DATE"),
    ", ",
    env!("RECASE_BUILD_TARGET"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "recase",
    about = "Convert identifiers between case styles",
    version,
    long_version = LONG_VERSION
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text into a target case style
    Convert(ConvertArgs),
    /// Infer a case style from an example identifier
    Infer(InferArgs),
    /// List the registered case styles
    List(ListArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&std::env::current_dir()?)?;

    match cli.command {
        Some(Commands::Convert(args)) => cli::convert::run(args, &config),
        Some(Commands::Infer(args)) => cli::infer::run(args, &config),
        Some(Commands::List(args)) => cli::list::run(args, &config),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
