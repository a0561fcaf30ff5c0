//! Two small command-line tools sharing one library: an addition-loop
//! micro-benchmark (`bench`) and a word-frequency counter (`wordfreq`).

pub mod cli;
pub mod core;
pub mod tasks;

pub use crate::core::{BenchmarkConfig, OutputFormat, ToolError, ToolResult, WordCountConfig};
pub use crate::tasks::{count_words, run_benchmark, WordCounter};
