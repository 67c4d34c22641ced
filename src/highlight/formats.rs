//! Token stream output formats
//!
//! This module contains the formats a token stream can be written out in:
//! - `raw`: one `Token.<category>\t'<text>'` line per token
//! - `json` / `yaml`: the tokens with categories and spans, for tooling
//! - `text`: the token texts joined back together (detokenizer)
//!
//! Styled rendering (HTML, terminal colours) is left to consumers.

pub mod detokenizer;
pub mod raw;
pub mod registry;
pub mod serialized;

pub use detokenizer::{detokenize, TextFormatter};
pub use raw::RawFormatter;
pub use registry::{FormatError, FormatRegistry, TokenFormatter};
pub use serialized::{JsonFormatter, YamlFormatter};
