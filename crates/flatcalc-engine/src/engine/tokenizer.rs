//! Splitting raw record text into the flat token buffer.
//!
//! Tokens are separated by whitespace or commas. A double-quoted run is kept
//! whole, so `"=AVG(A1, B1)"` stays a single token including its quotes.
//! Backslash escapes inside quotes do not end the run.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{CalcError, CalcResult};

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:[^\s",]|"(?:\\.|[^"])*")+"#).expect("token regex must compile")
    })
}

/// Ordered, immutable sequence of raw cell tokens.
///
/// This is both the list of cells to evaluate and the store that references
/// read from: column `A` is index 0, `B` is index 1 and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<String>,
}

impl TokenBuffer {
    /// Tokenize raw text. Fails if the text yields no tokens at all.
    pub fn tokenize(text: &str) -> CalcResult<TokenBuffer> {
        let tokens: Vec<String> = token_re()
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(CalcError::Tokenization);
        }
        Ok(TokenBuffer { tokens })
    }

    /// Build a buffer from already-split tokens.
    pub fn from_tokens<I, S>(tokens: I) -> TokenBuffer
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenBuffer {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Tokens from `start` to `end`, both inclusive.
    pub fn slice(&self, start: usize, end: usize) -> Option<&[String]> {
        self.tokens.get(start..=end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
