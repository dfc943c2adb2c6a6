use crate::error::Result;
use crate::highlight::WordMatch;
use crate::search::{search_file, SearchOptions};
use rand::seq::IndexedRandom;
use std::path::Path;

/// Printed in place of a word when a pattern has no matches at all.
pub const PLACEHOLDER: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseSlot {
    Word(WordMatch),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub slots: Vec<PhraseSlot>,
}

/// Builds `repetitions` phrases with one slot per pattern, in pattern order.
///
/// Each pattern is searched once against the word list; every phrase then
/// draws one uniform random pick from that pattern's match set, or the
/// placeholder when the set is empty. Patterns are searched even when
/// `repetitions` is zero, so bad patterns and a missing word list still
/// surface as errors.
pub fn compose_phrases(
    patterns: &[String],
    repetitions: usize,
    dict: &Path,
    opts: &SearchOptions,
) -> Result<Vec<Phrase>> {
    let mut rng = rand::rng();
    let mut phrases: Vec<Phrase> = (0..repetitions)
        .map(|_| Phrase { slots: Vec::new() })
        .collect();

    for pattern in patterns {
        let matches = search_file(dict, pattern, opts)?;
        for phrase in &mut phrases {
            match matches.choose(&mut rng) {
                Some(m) => phrase.slots.push(PhraseSlot::Word(m.clone())),
                None => phrase.slots.push(PhraseSlot::Placeholder),
            }
        }
    }

    Ok(phrases)
}
