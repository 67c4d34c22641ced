//! Format registry for token stream output
//!
//! This module provides a pluggable registry of output formats.
//! Each format implements the `TokenFormatter` trait and can be registered with `FormatRegistry`.

use crate::highlight::token::Token;
use std::collections::HashMap;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for token stream formatters
pub trait TokenFormatter: Send + Sync {
    /// The name of this format (e.g., "raw", "json")
    fn name(&self) -> &str;

    /// Write the tokens out in this format
    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token formatters
///
/// Formats are registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn TokenFormatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: TokenFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn TokenFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Format tokens using the specified format
    pub fn format(&self, tokens: &[Token<'_>], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.format(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::RawFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TextFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
