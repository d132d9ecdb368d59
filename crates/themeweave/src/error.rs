//! Error types for theme compilation.
//!
//! Every error in this crate is fatal to the compilation that raised it.
//! Nothing is retried, nothing is swallowed, and no partial output is ever
//! produced: emitting half a theme silently is far harder to debug than a
//! failed build.

use thiserror::Error;

/// Errors raised while validating, merging, or resolving theme configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// Structural misuse of the options surface, caught before any merge
    /// runs: missing, duplicate, or reserved theme names, scope
    /// configuration on themes that may not carry it, or whitespace inside
    /// a config key.
    #[error("invalid theme options: {0}")]
    Validation(String),

    /// Two themes declared the same path as shapes that cannot be merged.
    /// Only discoverable while merging, or when a merged resolver callback
    /// runs and its two sides resolve to incompatible shapes.
    #[error("unmergeable theme configuration: {0}")]
    Config(String),

    /// A resolver callback appeared somewhere callbacks are not allowed:
    /// below the top level of an extension tree, or returned from another
    /// callback.
    #[error("misplaced resolver callback: {0}")]
    Structural(String),

    /// A string classified as a color could not be parsed.
    #[error("malformed color \"{value}\": {reason}")]
    Parse { value: String, reason: String },
}

impl ThemeError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ThemeError::Validation(message.into())
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        ThemeError::Config(message.into())
    }

    pub(crate) fn structural(message: impl Into<String>) -> Self {
        ThemeError::Structural(message.into())
    }

    pub(crate) fn parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ThemeError::Parse {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
