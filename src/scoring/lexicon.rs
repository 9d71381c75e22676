//! Weighted phrase lexicon scoring.
//!
//! Matching is plain substring containment, not word-boundary matching: a
//! phrase scores whenever it appears anywhere in the lower-cased message, so
//! a short phrase can match inside an unrelated longer word. That is an
//! accepted false-positive mode of this scoring model, not a bug; switching
//! to word-boundary matching would silently change scoring outcomes.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One weighted phrase in a lexicon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub phrase: String,
    pub weight: u32,
}

impl LexiconEntry {
    pub fn new(phrase: &str, weight: u32) -> Self {
        Self {
            phrase: phrase.to_string(),
            weight,
        }
    }
}

/// A fixed phrase -> weight table, held in scan order.
///
/// Scan order is descending phrase length (characters), ties broken by the
/// original entry order. The order only affects how tallies iterate for
/// reporting; every phrase is tested independently, so the point total does
/// not depend on it.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new(entries: impl IntoIterator<Item = LexiconEntry>) -> Self {
        let mut entries: Vec<LexiconEntry> = entries
            .into_iter()
            .map(|e| LexiconEntry {
                phrase: e.phrase.to_lowercase(),
                weight: e.weight,
            })
            .collect();
        // Stable sort keeps insertion order for equal-length phrases.
        entries.sort_by_key(|e| std::cmp::Reverse(e.phrase.chars().count()));
        Self { entries }
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.iter().any(|e| e.phrase == phrase)
    }

    /// Entries in scan order
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }
}

/// Cumulative phrase -> count map with stable insertion order.
///
/// Serializes as a JSON object (`{"phrase": count, ...}`) whose key order is
/// the insertion order, which is why this is a small vec-backed map rather
/// than a HashMap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    counts: Vec<(String, u32)>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to a phrase, inserting it at the end on first sight
    pub fn record(&mut self, phrase: &str, count: u32) {
        match self.counts.iter_mut().find(|(p, _)| p == phrase) {
            Some((_, existing)) => *existing += count,
            None => self.counts.push((phrase.to_string(), count)),
        }
    }

    /// Fold another tally into this one, summing per-phrase counts
    pub fn merge(&mut self, other: &MatchTally) {
        for (phrase, count) in &other.counts {
            self.record(phrase, *count);
        }
    }

    pub fn get(&self, phrase: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(p, c)| (p.as_str(), *c))
    }
}

impl Serialize for MatchTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (phrase, count) in &self.counts {
            map.serialize_entry(phrase, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MatchTally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TallyVisitor;

        impl<'de> Visitor<'de> for TallyVisitor {
            type Value = MatchTally;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of phrase to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tally = MatchTally::new();
                while let Some((phrase, count)) = access.next_entry::<String, u32>()? {
                    tally.record(&phrase, count);
                }
                Ok(tally)
            }
        }

        deserializer.deserialize_map(TallyVisitor)
    }
}

/// Scores a single utterance's text against one lexicon
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(entries: &[LexiconEntry]) -> Self {
        Self {
            lexicon: Lexicon::new(entries.iter().cloned()),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score one message: total points plus a presence tally.
    ///
    /// The text is lower-cased and trimmed once. Each contained phrase adds
    /// its full weight and counts exactly once, no matter how often it
    /// repeats within the message. A longer phrase does not suppress a
    /// shorter one it contains.
    pub fn score(&self, text: &str) -> (u32, MatchTally) {
        let cleaned = text.to_lowercase();
        let cleaned = cleaned.trim();

        let mut total = 0u32;
        let mut tally = MatchTally::new();
        for entry in self.lexicon.iter() {
            if cleaned.contains(entry.phrase.as_str()) {
                total += entry.weight;
                tally.record(&entry.phrase, 1);
            }
        }
        (total, tally)
    }
}
