//! Tokens produced by the lexers
//!
//!     A token is a category plus the exact slice of the input it covers. Tokens borrow from the
//!     text being tokenized, so producing them allocates nothing beyond the output vector.

use super::token_type::TokenType;
use serde::Serialize;
use std::ops::Range;

/// One classified span of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenType,
    pub text: &'src str,
    /// Byte range of `text` within the tokenized input.
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenType, text: &'src str, start: usize) -> Self {
        Token {
            kind,
            text,
            span: start..start + text.len(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenType::Error
    }
}

/// Strip spans, keeping `(category, text)` pairs. Handy in assertions.
pub fn kinds_and_text<'src>(tokens: &[Token<'src>]) -> Vec<(TokenType, &'src str)> {
    tokens.iter().map(|t| (t.kind, t.text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_tracks_text_length() {
        let token = Token::new(TokenType::Keyword, "CALL", 4);
        assert_eq!(token.span, 4..8);
        assert!(!token.is_error());
    }

    #[test]
    fn test_serialize() {
        let token = Token::new(TokenType::Punctuation, "[", 1);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["kind"], "Punctuation");
        assert_eq!(json["text"], "[");
        assert_eq!(json["span"]["start"], 1);
        assert_eq!(json["span"]["end"], 2);
    }
}
