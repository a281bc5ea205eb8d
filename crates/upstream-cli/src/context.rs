//! Per-invocation file context shared by all commands

use std::path::{Path, PathBuf};

use upstream_block::ParseOptions;

/// The file a command operates on and how to read and write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// File holding the upstream block
    pub path: PathBuf,
    /// Tokenization used when reading, and checked before writing
    pub options: ParseOptions,
    /// Write even when text outside the block would be dropped
    pub force: bool,
}

impl FileContext {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: ParseOptions::default(),
            force: false,
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
