//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and edit reverse-proxy upstream blocks
#[derive(Parser, Debug)]
#[command(name = "upstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// File holding the upstream block
    #[arg(short, long, global = true, env = "UPSTREAM_FILE")]
    pub file: Option<PathBuf>,

    /// Split directive tokens on any whitespace, not only spaces
    #[arg(long, global = true)]
    pub any_whitespace: bool,

    /// Write even when text outside the block would be dropped
    #[arg(long, global = true)]
    pub force: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the block name and its numbered directive lines
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Rewrite the file in canonical layout
    Fmt {
        /// Exit with an error if the file is not already canonical
        #[arg(long)]
        check: bool,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Add a directive line
    ///
    /// Examples:
    ///   upstream -f backend.conf add-line server 10.0.0.3:80 weight=2
    ///   upstream -f backend.conf add-line --at 1 least_conn
    AddLine {
        /// Tokens of the new line
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Insert at this 1-based line number instead of appending
        #[arg(long)]
        at: Option<usize>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove every line starting with the given tokens
    ///
    /// Examples:
    ///   upstream -f backend.conf remove-line server 10.0.0.3:80
    RemoveLine {
        /// Leading tokens to match
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace a directive line
    SetLine {
        /// 1-based line number, as printed by `show`
        index: usize,

        /// Tokens of the replacement line
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Rename the block
    Rename {
        /// New block name
        name: String,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
}
