use std::error::Error;
use std::fmt::Display;

/// Error type for tool operations
#[derive(Debug)]
pub enum ToolError {
    /// Input could not be read or decoded
    Input(String),
    /// Output could not be written
    Output(String),
    /// Invalid argument or configuration value
    Validation(String),
    /// Report could not be serialized
    Serialization(String),
}

impl Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::Input(msg) => write!(f, "Input error: {}", msg),
            ToolError::Output(msg) => write!(f, "Output error: {}", msg),
            ToolError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ToolError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for ToolError {}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::Serialization(e.to_string())
    }
}

impl ToolError {
    /// Wrap an I/O error raised while reading input
    pub fn input(e: std::io::Error) -> Self {
        ToolError::Input(e.to_string())
    }

    /// Wrap an I/O error raised while writing output
    pub fn output(e: std::io::Error) -> Self {
        ToolError::Output(e.to_string())
    }
}

/// Result alias used across the crate
pub type ToolResult<T> = Result<T, ToolError>;
