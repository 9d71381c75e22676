//! Cross-utterance aggregation: drives the per-utterance scorers over the
//! whole transcript and folds their output into one `AnalysisResult`.

use thiserror::Error;
use tracing::debug;

use crate::config::RiskConfig;
use crate::scoring::{LexiconScorer, SentimentScorer, UrgentScanner};
use crate::transcript::Utterance;

use super::result::{AnalysisResult, LexiconMatches, RiskScores, SentimentTrend, UrgentFlag};

/// Raw point total that maps to a score of 100: the weight of the single
/// highest-severity keyword category. A fixed calibration constant, not
/// derived from data.
const SCORE_DIVISOR: u64 = 120;

/// How many leading/trailing sentiment values the trend comparison uses
const TREND_WINDOW: usize = 5;

/// Errors that can occur during analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A transcript with zero utterances has no sentiment windows to
    /// compare, and a defaulted trend would mask a data-quality problem.
    #[error("transcript produced no utterances; sentiment trend is undefined")]
    EmptyTranscript,
}

/// Runs the full risk analysis over an ordered utterance sequence.
///
/// The two lexicons are fully independent scoring pipelines sharing one
/// generic scorer; nothing is shared between them at runtime. All scorers
/// are built once from the configuration and are read-only afterwards.
pub struct RiskAnalyzer {
    hiv: LexiconScorer,
    mental: LexiconScorer,
    sentiment: SentimentScorer,
    urgent: UrgentScanner,
}

impl RiskAnalyzer {
    pub fn new(config: &RiskConfig) -> Self {
        Self {
            hiv: LexiconScorer::new(&config.hiv_lexicon),
            mental: LexiconScorer::new(&config.mental_lexicon),
            sentiment: SentimentScorer::new(config.sentiment.clone()),
            urgent: UrgentScanner::new(&config.urgent_phrases),
        }
    }

    /// Produce one `AnalysisResult` for the transcript.
    ///
    /// Fails up front on an empty transcript; every other step is total.
    pub fn analyze(&self, utterances: &[Utterance]) -> Result<AnalysisResult, AnalysisError> {
        if utterances.is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let mut hiv_total: u32 = 0;
        let mut mental_total: u32 = 0;
        let mut matches = LexiconMatches::default();
        let mut urgent = Vec::new();
        let mut raw_sentiments = Vec::with_capacity(utterances.len());

        for utterance in utterances {
            raw_sentiments.push(self.sentiment.score(&utterance.message));

            let (hiv_points, hiv_tally) = self.hiv.score(&utterance.message);
            let (mental_points, mental_tally) = self.mental.score(&utterance.message);
            hiv_total += hiv_points;
            mental_total += mental_points;
            matches.hiv.merge(&hiv_tally);
            matches.mental.merge(&mental_tally);

            for phrase in self.urgent.scan(&utterance.message) {
                urgent.push(UrgentFlag {
                    phrase: phrase.to_string(),
                    timestamp: utterance.timestamp.clone(),
                    speaker: utterance.speaker.clone(),
                    message: utterance.message.clone(),
                });
            }
        }

        let scores = RiskScores {
            hiv: normalize(hiv_total),
            mental: normalize(mental_total),
        };
        let sentiment_trend = classify_trend(&raw_sentiments);

        debug!(
            "Aggregation complete: hiv_total={} mental_total={} urgent={} trend={}",
            hiv_total,
            mental_total,
            urgent.len(),
            sentiment_trend
        );

        Ok(AnalysisResult {
            scores,
            matches,
            urgent,
            sentiment_trend,
            raw_sentiments,
        })
    }
}

/// Scale a raw point total onto 0-100.
///
/// Integer floor division; totals cannot be negative, so only the upper
/// clamp is needed.
fn normalize(total: u32) -> u32 {
    ((total as u64 * 100) / SCORE_DIVISOR).min(100) as u32
}

/// Compare the mean of the last window against the mean of the first.
///
/// For transcripts shorter than the window the two slices overlap or
/// coincide, which legitimately yields `Stable`. Callers guarantee a
/// non-empty slice.
fn classify_trend(sentiments: &[i32]) -> SentimentTrend {
    let head = &sentiments[..sentiments.len().min(TREND_WINDOW)];
    let tail = &sentiments[sentiments.len().saturating_sub(TREND_WINDOW)..];
    let first = mean(head);
    let last = mean(tail);
    if last > first {
        SentimentTrend::Improving
    } else if last < first {
        SentimentTrend::Worsening
    } else {
        SentimentTrend::Stable
    }
}

fn mean(values: &[i32]) -> f64 {
    values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64
}
