use std::io::{self, BufWriter};

use clap::Parser;
use log::info;

use tallybench::cli::{exit_code, init_logging, BenchArgs};
use tallybench::core::report::emit;
use tallybench::core::{BenchmarkConfig, ToolResult};
use tallybench::run_benchmark;

fn run(config: BenchmarkConfig) -> ToolResult<()> {
    let report = run_benchmark(&config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit(&report, config.format, &mut out)
}

fn main() {
    let args = BenchArgs::parse();
    init_logging();
    info!("Starting addition benchmark");

    std::process::exit(exit_code(run(BenchmarkConfig::from(&args))));
}
