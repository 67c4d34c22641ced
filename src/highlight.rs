//! Syntax-highlighting lexers
//!
//!     Lexers here turn source text into a flat stream of classified tokens for highlighting.
//!     They do not parse: there is no tree, no validation, and no input is ever rejected.
//!     Every character of the input ends up in exactly one token, unrecognised characters in
//!     one-character `Error` tokens, so the tokens always add back up to the input.
//!
//! Structure:
//!     - [token_type]: the hierarchical category taxonomy.
//!     - [rules]: rule tables, the data that defines a lexer.
//!     - [engine]: the state-machine tokenizer that runs a rule table.
//!     - [lexers]: the built-in lexers (FANUC TP, plain text).
//!     - [registry]: static metadata for every built-in lexer.
//!     - [options]: optional input preprocessing.
//!     - [formats]: output formats for token streams.

pub mod engine;
pub mod formats;
pub mod lexers;
pub mod options;
pub mod registry;
pub mod rules;
pub mod token;
pub mod token_type;

pub use engine::{RegexLexer, Tokens};
pub use lexers::{get_lexer_by_identifier, get_lexer_by_name};
pub use options::LexerOptions;
pub use registry::{LexerInfo, LEXERS};
pub use token::Token;
pub use token_type::TokenType;
