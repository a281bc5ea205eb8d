//! Show command implementation

use colored::Colorize;

use super::load_block;
use crate::context::FileContext;
use crate::error::Result;

/// Run the show command
///
/// Prints the block name followed by its directive lines numbered from 1.
pub fn run_show(ctx: &FileContext, json: bool) -> Result<()> {
    let (_, block) = load_block(ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&block)?);
        return Ok(());
    }

    println!("{} {}", "upstream".blue().bold(), block.name.cyan());
    if block.is_empty() {
        println!("  {}", "(no lines)".dimmed());
    }
    for (index, line) in block.lines.iter().enumerate() {
        println!("  {:>3}  {}", (index + 1).to_string().yellow(), line.join(" "));
    }

    Ok(())
}
