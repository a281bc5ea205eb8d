//! Parser configuration

/// Options controlling how directive lines are tokenized.
///
/// The default splits tokens on the ASCII space only, so a tab stays part of
/// the token it touches. Enable `any_whitespace` to split on every Unicode
/// whitespace character instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub any_whitespace: bool,
}

impl ParseOptions {
    /// Space-only tokenization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize on any whitespace.
    pub fn any_whitespace() -> Self {
        Self {
            any_whitespace: true,
        }
    }

    pub(crate) fn tokenize(&self, segment: &str) -> Vec<String> {
        if self.any_whitespace {
            segment.split_whitespace().map(str::to_string).collect()
        } else {
            segment
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        }
    }
}
