//! Whole-file load and dump of upstream blocks

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::block::UpstreamBlock;
use crate::options::ParseOptions;
use crate::{Error, Result, parser, writer};

/// Permission bits for newly created files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Read a file as text.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Loaded upstream file");
    Ok(text)
}

/// Write text to a file, creating it or truncating existing content.
///
/// New files get mode `0644` on Unix.
pub fn dump_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote upstream file");
    Ok(())
}

/// Read and parse a block from a file.
pub fn load(path: impl AsRef<Path>) -> Result<UpstreamBlock> {
    load_with(path, &ParseOptions::default())
}

/// Read and parse a block from a file with custom parse options.
pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<UpstreamBlock> {
    let text = load_text(path)?;
    parser::parse_with(&text, options)
}

/// Serialize a block and write it to a file.
pub fn dump(block: &UpstreamBlock, path: impl AsRef<Path>) -> Result<()> {
    dump_text(path, &writer::serialize(block))
}
