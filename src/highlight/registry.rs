//! Lexer registry
//!
//! Static metadata for every lexer this crate ships, keyed by identifier. Front ends consult it
//! to list the available lexers and to resolve the alias a user typed. The table is built once,
//! on first access, and never changes afterwards.
//!
//! Each lexer also carries its own copy of this metadata; a test keeps the two in agreement.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Where a lexer lives and what it handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LexerInfo {
    /// Module path of the lexer definition.
    pub module: &'static str,
    /// Human readable name.
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Filename glob patterns.
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

/// Identifier → metadata, ordered by identifier.
pub static LEXERS: Lazy<BTreeMap<&'static str, LexerInfo>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "TextLexer",
            LexerInfo {
                module: "tplex::highlight::lexers::special",
                name: "Text only",
                aliases: &["text"],
                filenames: &["*.txt"],
                mimetypes: &["text/plain"],
            },
        ),
        (
            "TpLexer",
            LexerInfo {
                module: "tplex::highlight::lexers::onerobotics",
                name: "TP",
                aliases: &["tp", "tpp", "tpe"],
                filenames: &["*.ls"],
                mimetypes: &[],
            },
        ),
    ])
});

/// Metadata for `identifier`, if registered.
pub fn get(identifier: &str) -> Option<&'static LexerInfo> {
    LEXERS.get(identifier)
}

/// Find the lexer answering to `alias`, ignoring ASCII case.
pub fn find_by_alias(alias: &str) -> Option<(&'static str, &'static LexerInfo)> {
    LEXERS.iter().find_map(|(id, info)| {
        info.aliases
            .iter()
            .any(|a| a.eq_ignore_ascii_case(alias))
            .then_some((*id, info))
    })
}

/// All registered identifiers, sorted.
pub fn identifiers() -> Vec<&'static str> {
    LEXERS.keys().copied().collect()
}
