//! Shared plumbing for both tools: errors, configuration, timing and
//! report output.

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;

pub use config::{BenchmarkConfig, OutputFormat, WordCountConfig};
pub use error::{ToolError, ToolResult};
pub use report::Report;
