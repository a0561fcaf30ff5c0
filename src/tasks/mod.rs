//! The two computations: the addition-loop benchmark and the word counter.

pub mod adder;
pub mod word_freq;

pub use adder::{run_benchmark, BenchmarkReport};
pub use word_freq::{count_words, WordCount, WordCounter, WordFrequencyReport};
