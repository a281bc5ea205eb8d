//! Upstream block CLI
//!
//! Inspects and rewrites the single `upstream { ... }` block held in a
//! reverse-proxy configuration file.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use upstream_block::ParseOptions;

use cli::{Cli, Commands};
use context::FileContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("{}: {}", "warning".yellow().bold(), e);
        }
        tracing::debug!("Verbose mode enabled");
    }

    let options = ParseOptions {
        any_whitespace: cli.any_whitespace,
    };

    match cli.command {
        Some(cmd) => {
            let path = cli.file.ok_or_else(|| {
                CliError::user("No file given. Pass --file or set UPSTREAM_FILE.")
            })?;
            let ctx = FileContext::new(path)
                .with_options(options)
                .with_force(cli.force);
            execute_command(cmd, &ctx)
        }
        None => {
            println!("{} Upstream block CLI", "upstream".green().bold());
            println!();
            println!("Run {} for available commands.", "upstream --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, ctx: &FileContext) -> Result<()> {
    tracing::debug!(path = %ctx.path().display(), ?cmd, "Running command");

    match cmd {
        Commands::Show { json } => commands::run_show(ctx, json),
        Commands::Fmt { check, dry_run } => commands::run_fmt(ctx, check, dry_run),
        Commands::AddLine {
            tokens,
            at,
            dry_run,
        } => commands::run_add_line(ctx, &tokens, at, dry_run),
        Commands::RemoveLine { tokens, dry_run } => {
            commands::run_remove_line(ctx, &tokens, dry_run)
        }
        Commands::SetLine {
            index,
            tokens,
            dry_run,
        } => commands::run_set_line(ctx, index, &tokens, dry_run),
        Commands::Rename { name, dry_run } => commands::run_rename(ctx, &name, dry_run),
    }
}
