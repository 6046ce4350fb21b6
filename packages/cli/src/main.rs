mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{list, render, shorthand, validate, ListArgs, RenderArgs, ShorthandArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Stencil CLI - resolve component props into render-ready nodes
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a component from JSON props
    Render(RenderArgs),

    /// Expand a shorthand value with a component's factory
    Shorthand(ShorthandArgs),

    /// Check JSON props against a component's contract
    Validate(ValidateArgs),

    /// List registered components
    List(ListArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Render(args) => render(args, &cwd),
                Command::Shorthand(args) => shorthand(args, &cwd),
                Command::Validate(args) => validate(args, &cwd),
                Command::List(args) => list(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
