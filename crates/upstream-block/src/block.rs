//! The structured form of an upstream block.

use crate::error::{Error, Result};
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One directive line: its tokens in order, without the terminating `;`.
pub type Line = Vec<String>;

/// Characters that would change the meaning of serialized text.
const RESERVED: &[char] = &[' ', ';', '{', '}', '\n', '\r'];

/// A parsed `upstream <name> { ... }` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamBlock {
    /// The identifier following the `upstream` keyword.
    pub name: String,
    /// Directive lines in document order.
    pub lines: Vec<Line>,
}

impl UpstreamBlock {
    /// Create an empty block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Create a block from existing lines.
    pub fn with_lines(name: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line built from `tokens`.
    pub fn push_line<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.push(collect_tokens(tokens));
    }

    /// Insert a line at `index`, shifting later lines down.
    ///
    /// # Errors
    /// Returns `Error::LineOutOfRange` if `index > len()`.
    pub fn insert_line<I, S>(&mut self, index: usize, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if index > self.lines.len() {
            return Err(self.out_of_range(index));
        }
        self.lines.insert(index, collect_tokens(tokens));
        Ok(())
    }

    /// Replace the line at `index`, returning the previous tokens.
    pub fn set_line<I, S>(&mut self, index: usize, tokens: I) -> Result<Line>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let err = self.out_of_range(index);
        let slot = self.lines.get_mut(index).ok_or(err)?;
        Ok(std::mem::replace(slot, collect_tokens(tokens)))
    }

    /// Remove and return the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> Result<Line> {
        if index >= self.lines.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.lines.remove(index))
    }

    /// Remove every line whose leading tokens equal `prefix`.
    ///
    /// Returns the number of lines removed. An empty prefix matches nothing.
    pub fn remove_matching<S: AsRef<str>>(&mut self, prefix: &[S]) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !starts_with(line, prefix));
        before - self.lines.len()
    }

    /// Lines whose leading tokens equal `prefix`, with their indices.
    pub fn find_lines<'a, S: AsRef<str>>(
        &'a self,
        prefix: &'a [S],
    ) -> impl Iterator<Item = (usize, &'a Line)> + 'a {
        self.lines
            .iter()
            .enumerate()
            .filter(move |(_, line)| starts_with(line, prefix))
    }

    /// Lines whose first token is `key`.
    pub fn lines_with_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Line> + 'a {
        self.lines
            .iter()
            .filter(move |line| line.first().is_some_and(|first| first == key))
    }

    /// Check that serializing this block yields text that parses back to it
    /// with default options.
    ///
    /// # Errors
    /// - `Error::InvalidName` if the name is not `[A-Za-z0-9-]+`
    /// - `Error::EmptyLine` if a line has no tokens
    /// - `Error::InvalidToken` if a token is empty or holds a reserved character
    ///
    /// Line numbers in errors are 1-based.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&ParseOptions::default())
    }

    /// Like [`validate`](Self::validate), for text that will be read back
    /// with `options`. With `any_whitespace` set, tokens must not contain
    /// any whitespace at all.
    pub fn validate_with(&self, options: &ParseOptions) -> Result<()> {
        if !is_valid_name(&self.name) {
            return Err(Error::InvalidName {
                name: self.name.clone(),
            });
        }

        for (index, line) in self.lines.iter().enumerate() {
            if line.is_empty() {
                return Err(Error::EmptyLine { line: index + 1 });
            }
            if let Some(token) = line.iter().find(|token| !is_valid_token(token, options)) {
                return Err(Error::InvalidToken {
                    line: index + 1,
                    token: token.clone(),
                });
            }
        }

        Ok(())
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::LineOutOfRange {
            index,
            len: self.lines.len(),
        }
    }
}

impl fmt::Display for UpstreamBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::writer::serialize(self))
    }
}

impl FromStr for UpstreamBlock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}

/// Whether `name` is usable as a block name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_token(token: &str, options: &ParseOptions) -> bool {
    !token.is_empty()
        && !token.contains(RESERVED)
        && !(options.any_whitespace && token.contains(char::is_whitespace))
}

fn collect_tokens<I, S>(tokens: I) -> Line
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}

fn starts_with<S: AsRef<str>>(line: &Line, prefix: &[S]) -> bool {
    !prefix.is_empty()
        && line.len() >= prefix.len()
        && line.iter().zip(prefix).all(|(token, want)| token == want.as_ref())
}
