//! Parsing and writing of reverse-proxy `upstream { ... }` blocks.
//!
//! A document holds exactly one flat block:
//!
//! ```text
//! upstream web-backend {
//!    server 10.0.0.1:80 weight=5;
//!    least_conn;
//! }
//! ```
//!
//! Directive lines are opaque token sequences. Parsing is pattern based and
//! deliberately narrow: a single top-level block, no nested braces, no
//! comments and no quoted tokens. Serializing always emits the canonical
//! layout, so a round trip normalizes whitespace but keeps names, line order
//! and token order.

pub mod block;
pub mod error;
pub mod io;
pub mod options;
pub mod parser;
pub mod writer;

pub use block::{Line, UpstreamBlock};
pub use error::{Error, Result};
pub use io::{dump, dump_text, load, load_text, load_with};
pub use options::ParseOptions;
pub use parser::{parse, parse_lines, parse_lines_with, parse_name, parse_with, surrounding_text};
pub use writer::serialize;
