//! [`UpstreamBlock`] to text serialization.

use crate::block::UpstreamBlock;

/// Indentation placed before the first token separator of every line.
const INDENT: &str = "   ";

/// Serializes a block into the canonical layout.
///
/// Each line is three spaces of indentation followed by ` <token>` for every
/// token and a terminating `;\n`. The closing brace carries no trailing
/// newline.
///
/// # Example
/// ```
/// use upstream_block::{serialize, UpstreamBlock};
///
/// let mut block = UpstreamBlock::new("backend");
/// block.push_line(["server", "10.0.0.1:80"]);
/// assert_eq!(
///     serialize(&block),
///     "upstream backend {\n    server 10.0.0.1:80;\n}"
/// );
/// ```
pub fn serialize(block: &UpstreamBlock) -> String {
    let mut body = String::new();
    for line in &block.lines {
        body.push_str(INDENT);
        for token in line {
            body.push(' ');
            body.push_str(token);
        }
        body.push_str(";\n");
    }

    format!("upstream {} {{\n{}}}", block.name, body)
}
