//! Error types for vitrine_effects

use thiserror::Error;

/// Errors that can occur while setting up effects
///
/// Runtime effect paths never error: a missing region, a digitless label,
/// or an unknown anchor is a silent no-op. The fallible surface is
/// configuration.
#[derive(Error, Debug)]
pub enum EffectsError {
    /// Configuration failed to parse
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for vitrine_effects operations
pub type Result<T> = std::result::Result<T, EffectsError>;
