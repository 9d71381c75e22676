//! Local analysis archive.
//!
//! Optional persistent storage for completed analyses, for later review.
//!
//! Storage location: `<base>/YYYY/MM/DD/<analysis_id>/`
//!
//! Files stored per analysis:
//! - metadata.json - analysis id, source file, timestamps, headline numbers
//! - report.txt - the rendered textual report
//! - analysis.json - the full analysis artifact

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::{AnalysisResult, SentimentTrend};
use crate::config::RiskConfig;

/// Headline facts about one archived analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveMetadata {
    pub analysis_id: String,
    pub source_file: String,
    pub analyzed_at: String,
    pub utterance_count: usize,
    pub hiv_score: u32,
    pub mental_score: u32,
    pub sentiment_trend: SentimentTrend,
    pub urgent_count: usize,
}

impl ArchiveMetadata {
    pub fn new(source_file: &str, utterance_count: usize, analysis: &AnalysisResult) -> Self {
        Self {
            analysis_id: Uuid::new_v4().to_string(),
            source_file: source_file.to_string(),
            analyzed_at: Utc::now().to_rfc3339(),
            utterance_count,
            hiv_score: analysis.scores.hiv,
            mental_score: analysis.scores.mental,
            sentiment_trend: analysis.sentiment_trend,
            urgent_count: analysis.urgent.len(),
        }
    }
}

/// Default archive base directory, next to the config file
pub fn default_archive_dir() -> Result<PathBuf> {
    Ok(RiskConfig::default_config_dir()?.join("archive"))
}

/// Date-tree directory for one analysis
fn analysis_dir(base: &Path, metadata: &ArchiveMetadata, date: &DateTime<Utc>) -> PathBuf {
    base.join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}", date.day()))
        .join(&metadata.analysis_id)
}

/// Store one analysis under the archive tree. Returns the directory created.
///
/// The date directory comes from the metadata's `analyzed_at`, so archiving
/// the same metadata twice lands in the same place.
pub fn archive_analysis(
    base: &Path,
    metadata: &ArchiveMetadata,
    report: &str,
    analysis: &AnalysisResult,
) -> Result<PathBuf> {
    let date = DateTime::parse_from_rfc3339(&metadata.analyzed_at)
        .context("Invalid analyzed_at timestamp in archive metadata")?
        .with_timezone(&Utc);
    let dir = analysis_dir(base, metadata, &date);
    fs::create_dir_all(&dir).context("Failed to create archive directory")?;

    let metadata_json =
        serde_json::to_string_pretty(metadata).context("Failed to serialize archive metadata")?;
    fs::write(dir.join("metadata.json"), metadata_json)
        .context("Failed to write archive metadata")?;

    fs::write(dir.join("report.txt"), report).context("Failed to write archived report")?;

    let analysis_json =
        serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")?;
    fs::write(dir.join("analysis.json"), analysis_json)
        .context("Failed to write archived analysis")?;

    debug!("Archived analysis {} to {:?}", metadata.analysis_id, dir);
    Ok(dir)
}
