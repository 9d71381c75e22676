//! Risk model configuration.
//!
//! The keyword tables are data, not code: a `RiskConfig` can be loaded from
//! a JSON file so lexicons are extendable without touching scoring logic.
//! When no file exists the built-in tables below apply. Lexicons are stored
//! as ordered entry lists because entry order is the tie-breaker for the
//! scorer's scan order.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scoring::{LexiconEntry, SentimentWords};

const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Built-in HIV acquisition risk lexicon (phrase, weight)
const HIV_KEYWORDS: &[(&str, u32)] = &[
    // Exposure events
    ("unprotected sex", 35),
    ("condomless", 35),
    ("no condom", 30),
    ("sexual assault", 60),
    ("rape", 60),
    ("bleeding after sex", 35),
    // Partner status
    ("partner hiv", 40),
    ("partner positive", 40),
    ("multiple partners", 25),
    ("new partner", 15),
    // Symptoms
    ("sti", 20),
    ("ulcer", 20),
    ("sore", 15),
    ("discharge", 15),
    // PEP window
    ("recent exposure", 30),
    ("72 hours", 30),
];

/// Built-in mental-health risk lexicon (phrase, weight)
const MENTAL_KEYWORDS: &[(&str, u32)] = &[
    // Emotional distress
    ("stressed", 20),
    ("anxious", 15),
    ("anxiety", 20),
    ("panic", 30),
    ("panic attack", 40),
    // Depression
    ("feeling down", 30),
    ("hopeless", 40),
    ("worthless", 40),
    ("can't cope", 40),
    ("overwhelmed", 30),
    ("not sleeping", 20),
    ("insomnia", 15),
    // Self-harm and suicidality
    ("suicide", 120),
    ("kill myself", 120),
    ("end my life", 120),
    ("self harm", 110),
    ("hurt myself", 110),
];

/// Phrases that raise an urgent flag, in reporting order
const URGENT_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "self harm",
    "hurt myself",
    "rape",
    "sexual assault",
];

const SENTIMENT_POSITIVE: &[&str] = &["good", "okay", "fine", "better", "improving", "relieved"];
const SENTIMENT_NEGATIVE: &[&str] =
    &["sad", "bad", "angry", "upset", "scared", "worried", "hopeless"];

/// Risk model configuration: the two lexicons, the urgent-phrase list and
/// the sentiment word lists. Immutable once built; the analyzer takes it by
/// reference at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    pub schema_version: u32,
    pub hiv_lexicon: Vec<LexiconEntry>,
    pub mental_lexicon: Vec<LexiconEntry>,
    pub urgent_phrases: Vec<String>,
    pub sentiment: SentimentWords,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            hiv_lexicon: entries(HIV_KEYWORDS),
            mental_lexicon: entries(MENTAL_KEYWORDS),
            urgent_phrases: strings(URGENT_PHRASES),
            sentiment: SentimentWords {
                positive: strings(SENTIMENT_POSITIVE),
                negative: strings(SENTIMENT_NEGATIVE),
            },
        }
    }
}

impl RiskConfig {
    /// Load config from file, or fall back to the built-in tables when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).context("Failed to read risk config file")?;
        let config: Self =
            serde_json::from_str(&content).context("Failed to parse risk config file")?;
        if config.schema_version != CONFIG_SCHEMA_VERSION {
            bail!(
                "Unsupported risk config schema version {} (expected {})",
                config.schema_version,
                CONFIG_SCHEMA_VERSION
            );
        }
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".riskanalysis"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("risk_config.json"))
    }
}

fn entries(table: &[(&str, u32)]) -> Vec<LexiconEntry> {
    table
        .iter()
        .map(|(phrase, weight)| LexiconEntry::new(phrase, *weight))
        .collect()
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
