use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::core::config::WordCountConfig;
use crate::core::error::{ToolError, ToolResult};
use crate::core::metrics::RunInfo;
use crate::core::report::Report;

/// A word and the number of times it occurred
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Case-insensitive word tally that remembers first-encounter order
#[derive(Debug, Clone)]
pub struct WordCounter {
    /// Position of each word in `entries`
    index: HashMap<String, usize>,
    /// Tallies in the order words were first seen
    entries: Vec<WordCount>,
    /// Fold words to lowercase before counting
    lowercase: bool,
    /// Number of words seen, repeats included
    total_words: u64,
    /// Number of lines consumed
    lines_read: u64,
}

/// Result of counting one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFrequencyReport {
    /// Run identity
    pub run: RunInfo,
    /// Lines read from the input
    pub lines: u64,
    /// Words read, repeats included
    pub total_words: u64,
    /// Distinct words seen
    pub distinct_words: usize,
    /// Most frequent words, highest count first
    pub top: Vec<WordCount>,
}

/// Word separators: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split `line` into words, dropping empty runs between separators
pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|w| !w.is_empty())
}

impl WordCounter {
    pub fn new() -> Self {
        Self::with_config(&WordCountConfig::default())
    }

    pub fn with_config(config: &WordCountConfig) -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            lowercase: config.lowercase,
            total_words: 0,
            lines_read: 0,
        }
    }

    /// Tally every whitespace-separated word of `line`
    pub fn feed_line(&mut self, line: &str) {
        self.lines_read += 1;

        if self.lowercase {
            let folded = line.to_lowercase();
            for word in split_words(&folded) {
                self.bump(word);
            }
        } else {
            for word in split_words(line) {
                self.bump(word);
            }
        }
    }

    fn bump(&mut self, word: &str) {
        self.total_words += 1;
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Feed every line of `reader`; fails on read errors and invalid UTF-8
    pub fn count_reader<R: BufRead>(&mut self, reader: R) -> ToolResult<()> {
        for line in reader.lines() {
            let line = line.map_err(ToolError::input)?;
            self.feed_line(&line);
        }

        debug!(
            "Counted {} words ({} distinct) over {} lines",
            self.total_words,
            self.entries.len(),
            self.lines_read
        );
        Ok(())
    }

    /// All words, highest count first; ties keep first-encounter order
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `limit` most frequent words
    pub fn top(&self, limit: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }

    /// Occurrences of `word`, folded the same way input is
    pub fn count_of(&self, word: &str) -> u64 {
        let key = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        self.index
            .get(&key)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Snapshot the tally as a report holding the top `limit` words
    pub fn report(&self, limit: usize) -> WordFrequencyReport {
        WordFrequencyReport {
            run: RunInfo::new(),
            lines: self.lines_read,
            total_words: self.total_words,
            distinct_words: self.entries.len(),
            top: self.top(limit),
        }
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Count the words of `reader` and rank them per `config`
pub fn count_words<R: BufRead>(reader: R, config: &WordCountConfig) -> ToolResult<WordFrequencyReport> {
    config.validate()?;

    let mut counter = WordCounter::with_config(config);
    counter.count_reader(reader)?;

    info!(
        "Ranking {} distinct words, keeping top {}",
        counter.len(),
        config.top_n
    );
    Ok(counter.report(config.top_n))
}

impl Report for WordFrequencyReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.top {
            writeln!(out, "{} {}", entry.word, entry.count)?;
        }
        Ok(())
    }
}
