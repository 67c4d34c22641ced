//! Raw token format
//!
//! One line per token: the category, a tab, and the token text quoted with escapes, e.g.
//!
//!     Token.Keyword.Type	'R'
//!     Token.Punctuation	'['
//!
//! Text is quoted with single quotes unless it contains a single quote and no double quote.
//! Backslashes, the quote, `\n`, `\r`, `\t` and other control characters are escaped, so every
//! token stays on its own line.

use super::registry::{FormatError, TokenFormatter};
use crate::highlight::token::Token;
use std::fmt::Write;

pub struct RawFormatter;

impl TokenFormatter for RawFormatter {
    fn name(&self) -> &str {
        "raw"
    }

    fn description(&self) -> &str {
        "One `Token.<category>\\t'<text>'` line per token"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tokens {
            writeln!(out, "{}\t{}", token.kind, quote(token.text))
                .map_err(|e| FormatError::Serialization(e.to_string()))?;
        }
        Ok(out)
    }
}

/// Quote `text` for the raw format.
pub fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
