use serde::{Deserialize, Serialize};

/// Positive/negative word lists for polarity scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentWords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Scores message polarity against fixed word lists.
///
/// The score is (positive words present) minus (negative words present),
/// each word checked once via substring containment, so repeating a word
/// within one message does not amplify the score. No clamping.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    words: SentimentWords,
}

impl SentimentScorer {
    pub fn new(words: SentimentWords) -> Self {
        Self {
            words: SentimentWords {
                positive: words.positive.iter().map(|w| w.to_lowercase()).collect(),
                negative: words.negative.iter().map(|w| w.to_lowercase()).collect(),
            },
        }
    }

    pub fn score(&self, text: &str) -> i32 {
        let cleaned = text.to_lowercase();
        let cleaned = cleaned.trim();

        let positive = self
            .words
            .positive
            .iter()
            .filter(|w| cleaned.contains(w.as_str()))
            .count() as i32;
        let negative = self
            .words
            .negative
            .iter()
            .filter(|w| cleaned.contains(w.as_str()))
            .count() as i32;
        positive - negative
    }
}
