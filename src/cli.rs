//! Command-line arguments and process bootstrap shared by both executables.

use clap::Parser;
use log::error;

use crate::core::config::{BenchmarkConfig, OutputFormat, WordCountConfig, DEFAULT_TOP_N};
use crate::core::error::ToolResult;

/// Time a loop that calls an addition function `n` times
#[derive(Debug, Parser)]
#[command(name = "bench", version)]
pub struct BenchArgs {
    /// Number of loop iterations
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Print the most frequent words read from standard input
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version)]
pub struct WordFreqArgs {
    /// How many words to print
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Count words exactly as written instead of folding to lowercase
    #[arg(long)]
    pub case_sensitive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<&BenchArgs> for BenchmarkConfig {
    fn from(args: &BenchArgs) -> Self {
        Self {
            iterations: args.n,
            format: args.format,
        }
    }
}

impl From<&WordFreqArgs> for WordCountConfig {
    fn from(args: &WordFreqArgs) -> Self {
        Self {
            top_n: args.top,
            lowercase: !args.case_sensitive,
            format: args.format,
        }
    }
}

/// Initialize logging to stderr; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Turn the outcome of a tool run into a process exit code
pub fn exit_code(result: ToolResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_args() {
        let args = BenchArgs::try_parse_from(["bench", "1000"]).unwrap();
        let config = BenchmarkConfig::from(&args);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.format, OutputFormat::Text);

        let args = BenchArgs::try_parse_from(["bench", "-3", "--format", "json"]).unwrap();
        assert_eq!(args.n, -3);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_bench_rejects_non_numeric() {
        assert!(BenchArgs::try_parse_from(["bench", "many"]).is_err());
        assert!(BenchArgs::try_parse_from(["bench"]).is_err());
    }

    #[test]
    fn test_word_freq_args() {
        let args = WordFreqArgs::try_parse_from(["wordfreq"]).unwrap();
        let config = WordCountConfig::from(&args);
        assert_eq!(config.top_n, 25);
        assert!(config.lowercase);

        let args = WordFreqArgs::try_parse_from(["wordfreq", "--top", "5", "--case-sensitive"]).unwrap();
        let config = WordCountConfig::from(&args);
        assert_eq!(config.top_n, 5);
        assert!(!config.lowercase);
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(Ok(())), 0);
        let err = crate::core::error::ToolError::Validation("nope".to_string());
        assert_eq!(exit_code(Err(err)), 1);
    }
}
