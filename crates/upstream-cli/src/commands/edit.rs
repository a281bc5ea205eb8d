//! Line and name editing command implementations

use colored::Colorize;

use super::{commit, line_error, line_index, load_block};
use crate::context::FileContext;
use crate::error::Result;

/// Run the add-line command
///
/// Appends the line, or inserts it before the 1-based line number `at`.
pub fn run_add_line(
    ctx: &FileContext,
    tokens: &[String],
    at: Option<usize>,
    dry_run: bool,
) -> Result<()> {
    let (before, mut block) = load_block(ctx)?;

    match at {
        Some(number) => block
            .insert_line(line_index(number)?, tokens.iter().cloned())
            .map_err(|e| line_error(number, e))?,
        None => block.push_line(tokens.iter().cloned()),
    }

    commit(ctx, &before, &block, dry_run)?;
    if !dry_run {
        println!("{} Added line: {}", "OK".green().bold(), tokens.join(" ").cyan());
    }
    Ok(())
}

/// Run the remove-line command
///
/// Removes every line whose leading tokens equal `tokens`.
pub fn run_remove_line(
    ctx: &FileContext,
    tokens: &[String],
    dry_run: bool,
) -> Result<()> {
    let (before, mut block) = load_block(ctx)?;

    let removed = block.remove_matching(tokens);
    if removed == 0 {
        println!(
            "{} No line starts with {}.",
            "WARN".yellow().bold(),
            tokens.join(" ").cyan()
        );
        return Ok(());
    }

    commit(ctx, &before, &block, dry_run)?;
    if !dry_run {
        println!("{} Removed {} line(s).", "OK".green().bold(), removed);
    }
    Ok(())
}

/// Run the set-line command
pub fn run_set_line(
    ctx: &FileContext,
    number: usize,
    tokens: &[String],
    dry_run: bool,
) -> Result<()> {
    let (before, mut block) = load_block(ctx)?;

    let old = block
        .set_line(line_index(number)?, tokens.iter().cloned())
        .map_err(|e| line_error(number, e))?;

    commit(ctx, &before, &block, dry_run)?;
    if !dry_run {
        println!(
            "{} Line {}: {} -> {}",
            "OK".green().bold(),
            number,
            old.join(" ").dimmed(),
            tokens.join(" ").cyan()
        );
    }
    Ok(())
}

/// Run the rename command
pub fn run_rename(ctx: &FileContext, name: &str, dry_run: bool) -> Result<()> {
    let (before, mut block) = load_block(ctx)?;

    let old = std::mem::replace(&mut block.name, name.to_string());

    commit(ctx, &before, &block, dry_run)?;
    if !dry_run {
        println!("{} Renamed {} -> {}", "OK".green().bold(), old, name.cyan());
    }
    Ok(())
}
