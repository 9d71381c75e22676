pub mod engine;
pub mod recommend;
pub mod result;

pub use engine::{AnalysisError, RiskAnalyzer};
pub use recommend::{recommendations, RiskTier};
pub use result::{AnalysisResult, LexiconMatches, RiskScores, SentimentTrend, UrgentFlag};
