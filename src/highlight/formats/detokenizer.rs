//! Detokenizer
//!
//! Joins token texts back into source text. Since every lexer covers its input exactly, this
//! is the inverse of tokenizing and the basis of the round-trip tests.

use super::registry::{FormatError, TokenFormatter};
use crate::highlight::token::Token;

/// Concatenate the texts of `tokens` in order.
pub fn detokenize(tokens: &[Token<'_>]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        result.push_str(token.text);
    }
    result
}

/// Writes the source text back out.
pub struct TextFormatter;

impl TokenFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Source text rebuilt from the tokens"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        Ok(detokenize(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::lexers::get_lexer_by_name;

    #[test]
    fn test_detokenize_program() {
        let source = "/PROG  MAIN\n/MN\n   1:  R[1:count]=R[1:count]+1 ;\n   2:  $SPEED=100 ;\n/END\n";
        let lexer = get_lexer_by_name("tp").unwrap();
        let tokens = lexer.tokenize(source);
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_detokenize_with_errors() {
        let source = "CALL `weird` @thing";
        let tokens = get_lexer_by_name("tp").unwrap().tokenize(source);
        assert!(tokens.iter().any(|t| t.is_error()));
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }
}
