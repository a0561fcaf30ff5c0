use serde::{Serialize, Deserialize};

use crate::core::error::{ToolError, ToolResult};

/// Default number of ranked words printed by the word counter
pub const DEFAULT_TOP_N: usize = 25;

/// How a report is written to standard output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain lines, one value per line
    Text,
    /// A single pretty-printed JSON document
    Json,
}

/// Configuration for the addition-loop benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Number of loop iterations; non-positive values run no iterations
    pub iterations: i64,
    /// Output format
    pub format: OutputFormat,
}

/// Configuration for the word-frequency counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountConfig {
    /// Maximum number of ranked words to print
    pub top_n: usize,
    /// Fold words to lowercase before counting
    pub lowercase: bool,
    /// Output format
    pub format: OutputFormat,
}

impl BenchmarkConfig {
    pub fn new(iterations: i64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

impl WordCountConfig {
    /// Reject settings that would print nothing
    pub fn validate(&self) -> ToolResult<()> {
        if self.top_n == 0 {
            return Err(ToolError::Validation("top must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 0,
            format: OutputFormat::Text,
        }
    }
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            lowercase: true,
            format: OutputFormat::Text,
        }
    }
}
