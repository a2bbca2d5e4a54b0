//! Error types for shader generation.
//!
//! Generation itself can only fail on an unknown rule format. The
//! configuration layer adds I/O and JSON failures on top of that.

use std::fmt;

/// Errors that can occur while turning a rule descriptor into GLSL.
#[derive(Debug)]
pub enum GenerateError {
    /// The `ruleFormat` tag does not name a known automaton family.
    UnsupportedRuleFormat(String),
    /// The parameters do not have the shape the family expects.
    InvalidParameters {
        /// Rule format whose parameters were rejected.
        format: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnsupportedRuleFormat(format) => {
                write!(f, "Unsupported rule format: {}", format)
            }
            GenerateError::InvalidParameters { format, source } => {
                write!(f, "Invalid parameters for rule format {}: {}", format, source)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::InvalidParameters { source, .. } => Some(source),
            GenerateError::UnsupportedRuleFormat(_) => None,
        }
    }
}

/// Errors that can occur when loading a shader configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    Io(std::io::Error),
    /// The file is not valid configuration JSON.
    Json(serde_json::Error),
    /// The configuration was read but its rule could not be compiled.
    Generate(GenerateError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Generate(e) => write!(f, "Failed to generate shader: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Generate(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<GenerateError> for ConfigError {
    fn from(e: GenerateError) -> Self {
        ConfigError::Generate(e)
    }
}
