//! Text to [`UpstreamBlock`] parsing.
//!
//! Both halves are driven by regular expressions over the newline-stripped
//! input:
//!
//! - the name is the first `[A-Za-z0-9-]+` run following `upstream` and
//!   whitespace, and must end at whitespace, `{` or end of input;
//! - the body is everything between the first `{` after the header and the
//!   *last* `}` in the text. Matching is not brace-depth aware.

use crate::block::{Line, UpstreamBlock};
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use regex::Regex;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"upstream\s+([a-zA-Z0-9-]+)(?:\s|\{|$)").expect("Invalid name regex")
});

static BODY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"upstream[\sa-zA-Z0-9-]+\{(.*)\}").expect("Invalid body regex")
});

static SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)upstream[\sa-zA-Z0-9-]+\{.*\}").expect("Invalid span regex")
});

/// Returns the text before and after the block, as found in the unmodified
/// input. Serializing a block drops this text.
///
/// Returns `None` when the input holds no `upstream ... { ... }` block.
///
/// # Example
/// ```
/// use upstream_block::surrounding_text;
///
/// let (before, after) = surrounding_text("# ops\nupstream x {\n a;\n}\n").unwrap();
/// assert_eq!(before, "# ops\n");
/// assert_eq!(after, "\n");
/// ```
pub fn surrounding_text(text: &str) -> Option<(&str, &str)> {
    let span = SPAN_REGEX.find(text)?;
    Some((&text[..span.start()], &text[span.end()..]))
}

/// Extracts the block name.
///
/// # Errors
/// Returns `Error::NameNotFound` if no `upstream <name>` header exists.
///
/// # Example
/// ```
/// use upstream_block::parse_name;
///
/// assert_eq!(parse_name("upstream web-backend {}").unwrap(), "web-backend");
/// assert!(parse_name("upstream web_backend {}").is_err());
/// ```
pub fn parse_name(text: &str) -> Result<String> {
    NAME_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(Error::NameNotFound)
}

/// Extracts the directive lines with space-only tokenization.
///
/// # Errors
/// Returns `Error::BlockNotFound` if there is no `upstream ... { ... }` body.
pub fn parse_lines(text: &str) -> Result<Vec<Line>> {
    parse_lines_with(text, &ParseOptions::default())
}

/// Extracts the directive lines using the given tokenization options.
///
/// Segments between `;` separators that hold no tokens are dropped, which
/// tolerates a trailing `;` before `}` and runs like `;;`.
pub fn parse_lines_with(text: &str, options: &ParseOptions) -> Result<Vec<Line>> {
    let body = BODY_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or(Error::BlockNotFound)?
        .as_str();

    Ok(body
        .split(';')
        .map(|segment| options.tokenize(segment))
        .filter(|line| !line.is_empty())
        .collect())
}

/// Parses a complete block with default options.
///
/// # Example
/// ```
/// use upstream_block::parse;
///
/// let block = parse("upstream web-backend {\n   server 10.0.0.1:80;\n}").unwrap();
/// assert_eq!(block.name, "web-backend");
/// assert_eq!(block.lines, vec![vec!["server", "10.0.0.1:80"]]);
/// ```
pub fn parse(text: &str) -> Result<UpstreamBlock> {
    parse_with(text, &ParseOptions::default())
}

/// Parses a complete block.
///
/// Line breaks are removed before matching, so a header or directive split
/// across lines is glued back together. The name is resolved first: a
/// missing name is reported even when the body is missing too.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<UpstreamBlock> {
    let flattened: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();

    let name = parse_name(&flattened)?;
    let lines = parse_lines_with(&flattened, options)?;

    tracing::debug!(name = %name, lines = lines.len(), "Parsed upstream block");

    Ok(UpstreamBlock { name, lines })
}
