use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;

#[derive(Parser)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: GazetteCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "config.json")]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "config.json")]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum GazetteCommand {
    /// Initialize a new Gazette project
    Init(InitArgs),

    /// Build the site from the configured articles and topics
    Build(BuildArgs),

    /// Remove the generated output directory
    Clean(CleanArgs),
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        GazetteCommand::Init(args) => {
            commands::init::run(&args)?;
        }
        GazetteCommand::Build(args) => {
            commands::build::run(&args)?;
        }
        GazetteCommand::Clean(args) => {
            commands::clean::run(&args)?;
        }
    }

    Ok(())
}
