use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::MatchTally;

/// Direction of the conversation's sentiment between its opening and
/// closing windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentTrend {
    Improving,
    Worsening,
    Stable,
}

impl fmt::Display for SentimentTrend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Improving => "Improving",
            Self::Worsening => "Worsening",
            Self::Stable => "Stable",
        };
        f.write_str(label)
    }
}

/// Normalized 0-100 risk scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScores {
    pub hiv: u32,
    pub mental: u32,
}

/// Cumulative keyword tallies, one per lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconMatches {
    pub hiv: MatchTally,
    pub mental: MatchTally,
}

/// A safety-critical phrase detected in one utterance.
///
/// One flag is created per (utterance, matched phrase) pair; the utterance's
/// timestamp, speaker and message travel with the flag so reports can quote
/// the context directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgentFlag {
    pub phrase: String,
    pub timestamp: String,
    pub speaker: String,
    pub message: String,
}

/// The engine's sole output for one transcript.
///
/// `raw_sentiments` has exactly one entry per utterance, in transcript
/// order; `urgent` preserves transcript order and, within one utterance,
/// the critical-phrase list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scores: RiskScores,
    pub matches: LexiconMatches,
    pub urgent: Vec<UrgentFlag>,
    pub sentiment_trend: SentimentTrend,
    pub raw_sentiments: Vec<i32>,
}
