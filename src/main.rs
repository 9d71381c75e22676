mod analysis;
mod archive;
mod config;
mod report;
mod scoring;
mod transcript;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use analysis::{recommendations, RiskAnalyzer};
use archive::{archive_analysis, default_archive_dir, ArchiveMetadata};
use config::RiskConfig;
use report::render_report;
use transcript::parse_transcript;

/// Headless CLI for clinical risk analysis of chat transcripts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the transcript text file
    input: PathBuf,

    /// Write the JSON analysis artifact to a custom path
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Skip writing the JSON analysis artifact
    #[arg(long)]
    no_json: bool,

    /// Path to a risk configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store the analysis in the local archive
    #[arg(long)]
    archive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Load risk configuration (built-in tables when no file exists)
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => RiskConfig::default_config_path()?,
    };
    let config = RiskConfig::load(&config_path)?;
    debug!(
        "Risk config: {} HIV phrases, {} mental-health phrases, {} urgent phrases",
        config.hiv_lexicon.len(),
        config.mental_lexicon.len(),
        config.urgent_phrases.len()
    );

    // Read and parse the transcript
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read transcript file {:?}", args.input))?;
    let utterances = parse_transcript(&content);
    info!("Parsed {} utterances from {:?}", utterances.len(), args.input);

    // Analyze
    let analyzer = RiskAnalyzer::new(&config);
    let result = analyzer.analyze(&utterances)?;
    let recs = recommendations(&result);

    info!(
        "HIV risk {} / mental-health risk {} / trend {}",
        result.scores.hiv, result.scores.mental, result.sentiment_trend
    );
    if !result.urgent.is_empty() {
        warn!("{} urgent flag(s) detected", result.urgent.len());
    }

    // Print the report
    let source_label = args.input.display().to_string();
    let report = render_report(&source_label, &result, &recs);
    println!("{}", report);

    // Write the JSON artifact
    if !args.no_json {
        let json_path = args
            .json_out
            .clone()
            .unwrap_or_else(|| artifact_path(&args.input));
        let json =
            serde_json::to_string_pretty(&result).context("Failed to serialize analysis")?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("Failed to write JSON artifact {:?}", json_path))?;
        println!("\nJSON results saved to: {}", json_path.display());
    }

    // Archive on request
    if args.archive {
        let metadata = ArchiveMetadata::new(&source_label, utterances.len(), &result);
        let dir = archive_analysis(&default_archive_dir()?, &metadata, &report, &result)?;
        info!("Analysis archived to {:?}", dir);
    }

    Ok(())
}

/// Default artifact path: `<input>.analysis.json` next to the transcript
fn artifact_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".analysis.json");
    PathBuf::from(name)
}
