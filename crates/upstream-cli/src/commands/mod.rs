//! Command implementations for upstream-cli

pub mod edit;
pub mod fmt;
pub mod show;

pub use edit::{run_add_line, run_remove_line, run_rename, run_set_line};
pub use fmt::run_fmt;
pub use show::run_show;

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use upstream_block::UpstreamBlock;

use crate::context::FileContext;
use crate::error::{CliError, Result};

/// Read the file and parse its block, keeping the original text for diffing.
pub(crate) fn load_block(ctx: &FileContext) -> Result<(String, UpstreamBlock)> {
    let text = upstream_block::load_text(ctx.path())?;
    let block = upstream_block::parse_with(&text, &ctx.options)?;
    Ok((text, block))
}

/// Validate and write `block`, or print the diff against `before` when
/// `dry_run` is set.
///
/// Writing replaces the whole file, so text outside the block in `before`
/// is refused unless `ctx.force` is set.
pub(crate) fn commit(
    ctx: &FileContext,
    before: &str,
    block: &UpstreamBlock,
    dry_run: bool,
) -> Result<()> {
    let path = ctx.path();
    block.validate_with(&ctx.options)?;
    let after = upstream_block::serialize(block);

    let drops_text = has_outside_text(before);
    if drops_text && !ctx.force && !dry_run {
        return Err(CliError::user(format!(
            "{} has text outside the upstream block that would be lost. Pass --force to write anyway.",
            path.display()
        )));
    }

    if dry_run {
        if drops_text {
            println!(
                "{} Text outside the upstream block will be dropped.",
                "WARN".yellow().bold()
            );
        }
        print_diff(path, before, &after);
        println!("{} Dry run, {} not modified.", "=>".blue().bold(), path.display());
        return Ok(());
    }

    upstream_block::dump_text(path, &after)?;
    tracing::debug!(path = %path.display(), lines = block.len(), "Saved upstream block");
    Ok(())
}

/// Whether anything other than whitespace surrounds the block.
fn has_outside_text(text: &str) -> bool {
    upstream_block::surrounding_text(text)
        .is_some_and(|(before, after)| !before.trim().is_empty() || !after.trim().is_empty())
}

/// Convert a 1-based line number from the command line to an index.
pub(crate) fn line_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| CliError::user("Line numbers start at 1"))
}

/// Report an out-of-range index with the 1-based number the user typed.
pub(crate) fn line_error(number: usize, err: upstream_block::Error) -> CliError {
    match err {
        upstream_block::Error::LineOutOfRange { len, .. } => CliError::user(format!(
            "Line {number} does not exist (block has {len} lines)"
        )),
        other => other.into(),
    }
}

/// Print a colored unified diff between two versions of the file.
fn print_diff(path: &Path, before: &str, after: &str) {
    if before == after {
        println!("{} No changes.", "OK".green().bold());
        return;
    }

    let name = path.display().to_string();
    let diff = TextDiff::from_lines(before, after);
    println!("{}", format!("--- {name}").red());
    println!("{}", format!("+++ {name}").green());
    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n');
        match change.tag() {
            ChangeTag::Delete => println!("{}", format!("-{line}").red()),
            ChangeTag::Insert => println!("{}", format!("+{line}").green()),
            ChangeTag::Equal => println!(" {line}"),
        }
    }
}
