use std::io::{self, BufReader, BufWriter};

use clap::Parser;
use log::info;

use tallybench::cli::{exit_code, init_logging, WordFreqArgs};
use tallybench::core::report::emit;
use tallybench::core::{ToolResult, WordCountConfig};
use tallybench::count_words;

fn run(config: WordCountConfig) -> ToolResult<()> {
    let stdin = io::stdin();
    let report = count_words(BufReader::new(stdin.lock()), &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit(&report, config.format, &mut out)
}

fn main() {
    let args = WordFreqArgs::parse();
    init_logging();
    info!("Counting words from standard input");

    std::process::exit(exit_code(run(WordCountConfig::from(&args))));
}
