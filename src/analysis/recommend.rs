//! Deterministic recommendation policy: maps an analysis result to
//! guideline-aligned action text, HIV guidance first, mental health second.

use super::result::{AnalysisResult, UrgentFlag};

/// Discrete guideline action buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

const HIGH_THRESHOLD: u32 = 70;
const MODERATE_THRESHOLD: u32 = 35;

/// Urgent phrases that force the CRITICAL mental-health tier regardless of
/// the numeric score. Narrower than the urgent-phrase list: "end my life",
/// "rape" and "sexual assault" raise flags but do not trigger this
/// override.
const CRITICAL_OVERRIDE_PHRASES: &[&str] = &["suicide", "kill myself", "self harm", "hurt myself"];

/// Tier for the HIV score; never `Critical`
pub fn hiv_tier(score: u32) -> RiskTier {
    if score >= HIGH_THRESHOLD {
        RiskTier::High
    } else if score >= MODERATE_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Tier for the mental-health score; the override is checked before any
/// threshold, so a zero score still goes CRITICAL when a flagged phrase is
/// in the override subset
pub fn mental_tier(score: u32, urgent: &[UrgentFlag]) -> RiskTier {
    let overridden = urgent
        .iter()
        .any(|flag| CRITICAL_OVERRIDE_PHRASES.contains(&flag.phrase.as_str()));
    if overridden {
        RiskTier::Critical
    } else if score >= HIGH_THRESHOLD {
        RiskTier::High
    } else if score >= MODERATE_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

fn hiv_guidance(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High | RiskTier::Critical => {
            "HIV Risk HIGH - Follow NDoH HTS & PEP guidelines:\n  - Immediate HIV test\n  - If exposure <72h: urgent PEP evaluation\n  - Screen for STIs\n  - Offer PrEP for ongoing risk"
        }
        RiskTier::Moderate => {
            "HIV Risk MODERATE - Recommend HTS testing soon, partner testing, \
             and discuss PrEP per NDoH prevention program."
        }
        RiskTier::Low => "HIV Risk LOW - Routine HTS testing recommended per NDoH policy.",
    }
}

fn mental_guidance(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Critical => {
            "Mental Health CRITICAL - Follow NDoH 72-hour Emergency Mental-Health policy:\n  - Immediate safety assessment\n  - Do not leave patient alone\n  - Urgent psychiatric evaluation"
        }
        RiskTier::High => {
            "Mental Health HIGH - Urgent referral to a mental-health professional. \
             Screen with PHQ-9/GAD-7 and initiate brief counselling."
        }
        RiskTier::Moderate => {
            "Mental Health MODERATE - Begin supportive counselling, lifestyle \
             interventions, and schedule follow-up in 1-2 weeks."
        }
        RiskTier::Low => {
            "Mental Health LOW - Mild symptoms: recommend self-care, sleep hygiene, \
             and monitoring for escalation."
        }
    }
}

/// The ordered recommendation pair: HIV guidance, then mental-health
/// guidance. Pure and side-effect-free.
pub fn recommendations(result: &AnalysisResult) -> Vec<String> {
    vec![
        hiv_guidance(hiv_tier(result.scores.hiv)).to_string(),
        mental_guidance(mental_tier(result.scores.mental, &result.urgent)).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::{LexiconMatches, RiskScores, SentimentTrend};

    fn flag(phrase: &str) -> UrgentFlag {
        UrgentFlag {
            phrase: phrase.to_string(),
            timestamp: "01/01/2024, 10:00".to_string(),
            speaker: "Alice".to_string(),
            message: format!("... {} ...", phrase),
        }
    }

    fn result(hiv: u32, mental: u32, urgent: Vec<UrgentFlag>) -> AnalysisResult {
        AnalysisResult {
            scores: RiskScores { hiv, mental },
            matches: LexiconMatches::default(),
            urgent,
            sentiment_trend: SentimentTrend::Stable,
            raw_sentiments: vec![0],
        }
    }

    #[test]
    fn test_hiv_tier_thresholds() {
        assert_eq!(hiv_tier(0), RiskTier::Low);
        assert_eq!(hiv_tier(34), RiskTier::Low);
        assert_eq!(hiv_tier(35), RiskTier::Moderate);
        assert_eq!(hiv_tier(69), RiskTier::Moderate);
        assert_eq!(hiv_tier(70), RiskTier::High);
        assert_eq!(hiv_tier(100), RiskTier::High);
    }

    #[test]
    fn test_mental_tier_thresholds_without_flags() {
        assert_eq!(mental_tier(34, &[]), RiskTier::Low);
        assert_eq!(mental_tier(35, &[]), RiskTier::Moderate);
        assert_eq!(mental_tier(70, &[]), RiskTier::High);
    }

    #[test]
    fn test_override_forces_critical_even_at_zero_score() {
        assert_eq!(
            mental_tier(0, &[flag("kill myself")]),
            RiskTier::Critical
        );
        assert_eq!(mental_tier(0, &[flag("suicide")]), RiskTier::Critical);
        assert_eq!(mental_tier(0, &[flag("self harm")]), RiskTier::Critical);
        assert_eq!(mental_tier(0, &[flag("hurt myself")]), RiskTier::Critical);
    }

    #[test]
    fn test_flags_outside_override_subset_do_not_force_critical() {
        assert_eq!(mental_tier(0, &[flag("end my life")]), RiskTier::Low);
        assert_eq!(mental_tier(0, &[flag("rape")]), RiskTier::Low);
        assert_eq!(mental_tier(40, &[flag("sexual assault")]), RiskTier::Moderate);
    }

    #[test]
    fn test_override_beats_numeric_score() {
        assert_eq!(mental_tier(100, &[flag("suicide")]), RiskTier::Critical);
    }

    #[test]
    fn test_recommendations_are_hiv_then_mental() {
        let recs = recommendations(&result(80, 10, vec![]));
        assert_eq!(recs.len(), 2);
        assert!(recs[0].starts_with("HIV Risk HIGH"));
        assert!(recs[1].starts_with("Mental Health LOW"));
    }

    #[test]
    fn test_critical_recommendation_text() {
        let recs = recommendations(&result(0, 0, vec![flag("kill myself")]));
        assert!(recs[1].starts_with("Mental Health CRITICAL"));
        assert!(recs[1].contains("Immediate safety assessment"));
    }

    #[test]
    fn test_moderate_recommendation_text() {
        let recs = recommendations(&result(40, 50, vec![]));
        assert!(recs[0].starts_with("HIV Risk MODERATE"));
        assert!(recs[1].starts_with("Mental Health MODERATE"));
    }
}
