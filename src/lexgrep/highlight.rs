use regex::Regex;

/// A segment of a matched word, either plain text or a matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

impl MatchSegment {
    pub fn text(&self) -> &str {
        match self {
            MatchSegment::Plain(s) => s,
            MatchSegment::Match(s) => s,
        }
    }
}

/// A word that matched the pattern, split into plain and matched segments.
///
/// Concatenating the segment texts in order yields `word` exactly, so any
/// rendering of the segments strips back to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub segments: Vec<MatchSegment>,
}

/// Splits `word` into segments around every non-overlapping match of `re`,
/// left to right. Returns `None` when the pattern does not match at all.
pub fn highlight_matches(word: &str, re: &Regex) -> Option<WordMatch> {
    let mut segments = Vec::new();
    let mut last_idx = 0;

    for m in re.find_iter(word) {
        if m.start() > last_idx {
            segments.push(MatchSegment::Plain(word[last_idx..m.start()].to_string()));
        }
        segments.push(MatchSegment::Match(m.as_str().to_string()));
        last_idx = m.end();
    }

    if segments.is_empty() {
        return None;
    }

    if last_idx < word.len() {
        segments.push(MatchSegment::Plain(word[last_idx..].to_string()));
    }

    Some(WordMatch {
        word: word.to_string(),
        segments,
    })
}
