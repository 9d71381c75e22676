pub mod lexicon;
pub mod sentiment;
pub mod urgent;

pub use lexicon::{Lexicon, LexiconEntry, LexiconScorer, MatchTally};
pub use sentiment::{SentimentScorer, SentimentWords};
pub use urgent::UrgentScanner;
