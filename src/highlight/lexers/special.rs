//! Plain text
//!
//! Fallback lexer that emits its whole input as a single `Text` token.

use crate::highlight::engine::RegexLexer;
use crate::highlight::registry::LexerInfo;
use crate::highlight::rules::{rule, RuleError, StateTable};
use crate::highlight::token_type::TokenType;

pub const IDENTIFIER: &str = "TextLexer";

pub const INFO: LexerInfo = LexerInfo {
    module: "tplex::highlight::lexers::special",
    name: "Text only",
    aliases: &["text"],
    filenames: &["*.txt"],
    mimetypes: &["text/plain"],
};

pub fn text_lexer() -> Result<RegexLexer, RuleError> {
    let table = StateTable::new(vec![("root", vec![rule(r"(?s).+", TokenType::Text)])])?;
    Ok(RegexLexer::new(IDENTIFIER, INFO, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token() {
        let lexer = text_lexer().unwrap();
        let tokens = lexer.tokenize("line one\nline `two`\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenType::Text);
        assert_eq!(tokens[0].text, "line one\nline `two`\n");
    }

    #[test]
    fn test_empty() {
        assert!(text_lexer().unwrap().tokenize("").is_empty());
    }
}
