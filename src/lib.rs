//! # tplex
//!
//! Syntax-highlighting lexers for FANUC TP robot programs.
//!
//! ```ignore
//! use tplex::highlight::get_lexer_by_name;
//!
//! let lexer = get_lexer_by_name("tp").unwrap();
//! for token in lexer.tokens("R[1]=R[1]+1 ;") {
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! ```
//!
//! See [highlight] for the lexers and [config] for the shared configuration loader.

pub mod config;
pub mod highlight;
