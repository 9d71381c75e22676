//! Textual report rendering.
//!
//! A pure projection of already-computed analysis values into the printed
//! report; no scoring or policy decisions happen here.

use crate::analysis::AnalysisResult;

/// Render the human-readable report: header, scores, sentiment trend, the
/// two indicator lists, urgent flags, then the recommendations in HIV-then-
/// mental order.
pub fn render_report(source: &str, analysis: &AnalysisResult, recommendations: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("========== Conversation Risk Analysis ==========".to_string());
    lines.push(String::new());
    lines.push(format!("Source file: {}", source));
    lines.push(String::new());

    lines.push("---- Risk Scores (0-100) ----".to_string());
    lines.push(format!("HIV acquisition risk: {}", analysis.scores.hiv));
    lines.push(format!("Mental-health risk: {}", analysis.scores.mental));
    lines.push(String::new());

    lines.push(format!("Sentiment trend: {}", analysis.sentiment_trend));
    lines.push(String::new());

    lines.push("---- HIV indicators detected ----".to_string());
    if analysis.matches.hiv.is_empty() {
        lines.push("  none".to_string());
    } else {
        for (phrase, count) in analysis.matches.hiv.iter() {
            lines.push(format!("  - {} (x{})", phrase, count));
        }
    }
    lines.push(String::new());

    lines.push("---- Mental-health indicators detected ----".to_string());
    if analysis.matches.mental.is_empty() {
        lines.push("  none".to_string());
    } else {
        for (phrase, count) in analysis.matches.mental.iter() {
            lines.push(format!("  - {} (x{})", phrase, count));
        }
    }
    lines.push(String::new());

    lines.push("---- Urgent Red Flags ----".to_string());
    if analysis.urgent.is_empty() {
        lines.push("  none".to_string());
    } else {
        for flag in &analysis.urgent {
            lines.push(format!(
                "  !!! {} @ {} ({}): {}",
                flag.phrase, flag.timestamp, flag.speaker, flag.message
            ));
        }
    }
    lines.push(String::new());

    lines.push("---- NDoH-Aligned Treatment Plan ----".to_string());
    for rec in recommendations {
        lines.push(format!("* {}", rec));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LexiconMatches, RiskScores, SentimentTrend, UrgentFlag};

    fn empty_result() -> AnalysisResult {
        AnalysisResult {
            scores: RiskScores { hiv: 0, mental: 0 },
            matches: LexiconMatches::default(),
            urgent: vec![],
            sentiment_trend: SentimentTrend::Stable,
            raw_sentiments: vec![0],
        }
    }

    #[test]
    fn test_sections_appear_in_contract_order() {
        let report = render_report("chat.txt", &empty_result(), &["a".into(), "b".into()]);
        let order = [
            "Conversation Risk Analysis",
            "Risk Scores",
            "Sentiment trend",
            "HIV indicators",
            "Mental-health indicators",
            "Urgent Red Flags",
            "NDoH-Aligned Treatment Plan",
        ];
        let mut cursor = 0;
        for section in order {
            let position = report[cursor..]
                .find(section)
                .unwrap_or_else(|| panic!("section {:?} missing or out of order", section));
            cursor += position;
        }
    }

    #[test]
    fn test_empty_lists_render_none() {
        let report = render_report("chat.txt", &empty_result(), &[]);
        assert_eq!(report.matches("  none").count(), 3);
    }

    #[test]
    fn test_indicators_and_flags_rendered() {
        let mut result = empty_result();
        result.scores = RiskScores { hiv: 58, mental: 33 };
        result.matches.hiv.record("unprotected sex", 2);
        result.urgent.push(UrgentFlag {
            phrase: "suicide".to_string(),
            timestamp: "05/03/2024, 22:10".to_string(),
            speaker: "Sipho".to_string(),
            message: "talked about suicide".to_string(),
        });

        let report = render_report("chat.txt", &result, &[]);
        assert!(report.contains("HIV acquisition risk: 58"));
        assert!(report.contains("  - unprotected sex (x2)"));
        assert!(report.contains("!!! suicide @ 05/03/2024, 22:10 (Sipho): talked about suicide"));
    }

    #[test]
    fn test_recommendations_keep_given_order() {
        let report = render_report(
            "chat.txt",
            &empty_result(),
            &["first rec".into(), "second rec".into()],
        );
        let first = report.find("* first rec").unwrap();
        let second = report.find("* second rec").unwrap();
        assert!(first < second);
    }
}
