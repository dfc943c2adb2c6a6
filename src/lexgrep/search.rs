use crate::error::{LexgrepError, Result};
use crate::filter::WordFilter;
use crate::highlight::{highlight_matches, WordMatch};
use regex::{Regex, RegexBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Per-invocation search settings, applied uniformly to every line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_insensitive: bool,
    pub filter: WordFilter,
}

pub fn compile_pattern(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| LexgrepError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Collects every eligible, matching word from `reader` in source order.
pub fn search_reader<R: BufRead>(
    reader: R,
    re: &Regex,
    filter: &WordFilter,
) -> io::Result<Vec<WordMatch>> {
    let mut matches = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if !filter.is_eligible(word) {
            continue;
        }
        if let Some(m) = highlight_matches(word, re) {
            matches.push(m);
        }
    }
    Ok(matches)
}

/// Searches the word list at `path`, materializing the full result set.
///
/// The file must open and read to the end; either failure is
/// `SourceUnavailable` with the attempted path. A malformed pattern is
/// `InvalidPattern` and aborts before any line is read.
pub fn search_file(path: &Path, pattern: &str, opts: &SearchOptions) -> Result<Vec<WordMatch>> {
    let file = File::open(path).map_err(|source| LexgrepError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let re = compile_pattern(pattern, opts.case_insensitive)?;

    search_reader(BufReader::new(file), &re, &opts.filter).map_err(|source| {
        LexgrepError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })
}
