use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use repflow::cli::args::{Cli, Commands};
use repflow::cli::commands;
use repflow::error::RepflowError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RepflowError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Start => commands::start(format)?,
        Commands::Plan(args) => commands::plan(args.section.as_deref(), format)?,
        Commands::Reset { force } => commands::reset(force, format)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
