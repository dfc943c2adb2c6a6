//! # Word Eligibility Rules
//!
//! Decides which word-list entries take part in a search at all. System word
//! lists carry proper nouns and possessive forms alongside ordinary words;
//! both are excluded unless explicitly allowed.

/// Suffix marking possessive/plural entries ("grape's").
pub const PLURAL_SUFFIX: &str = "'s";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFilter {
    pub allow_proper_nouns: bool,
    pub allow_plurals: bool,
}

impl WordFilter {
    /// Whether a word takes part in the search.
    ///
    /// Rules, each independent of the others:
    /// 1. Empty words are never eligible (callers trim line endings first).
    /// 2. Words whose first character is uppercase are proper nouns,
    ///    excluded unless `allow_proper_nouns`.
    /// 3. Words ending in "'s" are excluded unless `allow_plurals`.
    pub fn is_eligible(&self, word: &str) -> bool {
        let mut chars = word.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return false,
        };

        if !self.allow_proper_nouns && first.is_uppercase() {
            return false;
        }
        if !self.allow_plurals && word.ends_with(PLURAL_SUFFIX) {
            return false;
        }
        true
    }
}
