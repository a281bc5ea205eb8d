//! Fmt command implementation
//!
//! Rewrites a file into canonical layout. Names, lines and token order are
//! kept; text outside the block is only dropped with `--force`.

use colored::Colorize;

use super::{commit, load_block};
use crate::context::FileContext;
use crate::error::{CliError, Result};

/// Run the fmt command
pub fn run_fmt(ctx: &FileContext, check: bool, dry_run: bool) -> Result<()> {
    let (text, block) = load_block(ctx)?;
    let canonical = upstream_block::serialize(&block);
    let path = ctx.path();

    if text == canonical {
        println!("{} {} is already formatted.", "OK".green().bold(), path.display());
        return Ok(());
    }

    if check {
        return Err(CliError::user(format!(
            "{} is not in canonical format",
            path.display()
        )));
    }

    commit(ctx, &text, &block, dry_run)?;
    if !dry_run {
        println!("{} Formatted {}.", "OK".green().bold(), path.display());
    }
    Ok(())
}
