//! Structured token dumps
//!
//! JSON and YAML renderings of the token stream, with category paths and byte spans.

use super::registry::{FormatError, TokenFormatter};
use crate::highlight::token::Token;

pub struct JsonFormatter;

impl TokenFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Tokens as a JSON array"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

pub struct YamlFormatter;

impl TokenFormatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Tokens as a YAML sequence"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_yaml::to_string(tokens).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
