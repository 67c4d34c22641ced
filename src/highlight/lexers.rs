//! Built-in lexers
//!
//! Each lexer is compiled once, on first use, and shared from then on. Lookups go through the
//! [registry](super::registry) so aliases resolve the same way everywhere.

pub mod onerobotics;
pub mod special;

use super::engine::RegexLexer;
use super::registry;
use once_cell::sync::Lazy;

static TP_LEXER: Lazy<RegexLexer> =
    Lazy::new(|| onerobotics::tp_lexer().expect("TP rule table compiles"));

static TEXT_LEXER: Lazy<RegexLexer> =
    Lazy::new(|| special::text_lexer().expect("text rule table compiles"));

/// The lexer registered under `identifier`.
pub fn get_lexer_by_identifier(identifier: &str) -> Option<&'static RegexLexer> {
    match identifier {
        onerobotics::IDENTIFIER => Some(&*TP_LEXER),
        special::IDENTIFIER => Some(&*TEXT_LEXER),
        _ => None,
    }
}

/// The lexer answering to `alias` (`tp`, `tpe`, `text`, ...).
pub fn get_lexer_by_name(alias: &str) -> Option<&'static RegexLexer> {
    let (identifier, _) = registry::find_by_alias(alias)?;
    get_lexer_by_identifier(identifier)
}

/// Every built-in lexer, in registry order.
pub fn all_lexers() -> Vec<&'static RegexLexer> {
    registry::identifiers()
        .into_iter()
        .filter_map(get_lexer_by_identifier)
        .collect()
}
