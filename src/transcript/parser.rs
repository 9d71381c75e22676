use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One parsed line of conversation
///
/// The timestamp is kept verbatim (by convention `DD/MM/YYYY, HH:MM`) and is
/// never parsed into a date type; it only travels through to reports and
/// urgent flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub timestamp: String,
    pub speaker: String,
    pub message: String,
}

impl Utterance {
    pub fn new(timestamp: &str, speaker: &str, message: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            speaker: speaker.to_string(),
            message: message.trim().to_string(),
        }
    }
}

/// Expected line shape: `[timestamp] speaker: message`
///
/// The speaker group is lazy so it stops at the first colon after the
/// closing bracket.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\[(.*?)\]\s*(.*?):\s*(.*)$").expect("line pattern is valid")
    })
}

/// Parse raw transcript text into an ordered utterance sequence.
///
/// Lines that do not match the bracketed format are skipped silently; a
/// malformed transcript simply yields fewer (or zero) utterances, never an
/// error.
pub fn parse_transcript(text: &str) -> Vec<Utterance> {
    let pattern = line_pattern();
    text.lines()
        .filter_map(|line| {
            pattern.captures(line).map(|caps| {
                Utterance::new(
                    caps.get(1).map_or("", |m| m.as_str()),
                    caps.get(2).map_or("", |m| m.as_str()),
                    caps.get(3).map_or("", |m| m.as_str()),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        let parsed = parse_transcript("[01/01/2024, 10:00] Alice: Hello there");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].timestamp, "01/01/2024, 10:00");
        assert_eq!(parsed[0].speaker, "Alice");
        assert_eq!(parsed[0].message, "Hello there");
    }

    #[test]
    fn test_message_keeps_everything_after_first_colon() {
        let parsed = parse_transcript("[01/01/2024, 10:00] Nurse Joy: note: follow up at 14:30");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].speaker, "Nurse Joy");
        assert_eq!(parsed[0].message, "note: follow up at 14:30");
    }

    #[test]
    fn test_message_whitespace_trimmed() {
        let parsed = parse_transcript("[t] A:    padded message   ");
        assert_eq!(parsed[0].message, "padded message");
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let text = "\
[01/01/2024, 10:00] Alice: first
random chatter without a bracket
-- divider --
[01/01/2024, 10:05] Bob: second";
        let parsed = parse_transcript(text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].message, "first");
        assert_eq!(parsed[1].message, "second");
    }

    #[test]
    fn test_order_follows_transcript() {
        let text = "[1] A: one\n[2] B: two\n[3] C: three";
        let speakers: Vec<_> = parse_transcript(text)
            .into_iter()
            .map(|u| u.speaker)
            .collect();
        assert_eq!(speakers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input_yields_no_utterances() {
        assert!(parse_transcript("").is_empty());
        assert!(parse_transcript("no structure here at all").is_empty());
    }

    #[test]
    fn test_empty_bracket_and_message() {
        let parsed = parse_transcript("[] :");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].timestamp, "");
        assert_eq!(parsed[0].speaker, "");
        assert_eq!(parsed[0].message, "");
    }
}
