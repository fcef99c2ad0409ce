// Feedback store - append-only CSV log plus derived insights

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const CSV_FILE: &str = "feedback_log.csv";

/// Fixed column order of the log. Existing files are never migrated.
const HEADER: [&str; 7] = [
    "timestamp",
    "intern_name",
    "intern_email",
    "feedback",
    "review",
    "predicted_sentiment",
    "confidence",
];

/// How many submissions the insights page lists.
const RECENT_LIMIT: usize = 5;

/// One classified submission. Append-only: rows are never mutated or
/// deduplicated, and file order is arrival order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    pub timestamp: String,
    pub intern_name: String,
    pub intern_email: String,
    pub feedback: String,
    pub review: String,
    pub predicted_sentiment: String,
    /// Stored pre-formatted to 4 decimal places.
    pub confidence: String,
}

impl FeedbackRecord {
    /// Build a record timestamped now (local time, second resolution).
    pub fn new(
        intern_name: &str,
        intern_email: &str,
        feedback: &str,
        review: &str,
        label: &str,
        confidence: f64,
    ) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            intern_name: intern_name.to_string(),
            intern_email: intern_email.to_string(),
            feedback: feedback.to_string(),
            review: review.to_string(),
            predicted_sentiment: label.to_string(),
            confidence: format!("{confidence:.4}"),
        }
    }
}

/// Counts of the three recognized sentiment labels. Serialized as-is into
/// the insights page for client-side charting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Per-label share of recognized records, in percent with one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentShares {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Everything the insights page renders, recomputed from the full log on
/// every request.
#[derive(Debug, Clone)]
pub struct InsightsReport {
    pub counts: SentimentCounts,
    pub shares: SentimentShares,
    /// Most-recent-first, at most five entries.
    pub recent: Vec<FeedbackRecord>,
}

/// Handle on the CSV log. The file is appended and re-read without locking;
/// concurrent writers may interleave rows. Accepted limitation.
#[derive(Debug, Clone)]
pub struct FeedbackStore {
    csv_path: PathBuf,
}

impl FeedbackStore {
    /// Open the store under `data_dir`, creating the directory and a
    /// header-only log file when absent.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let csv_path = data_dir.join(CSV_FILE);
        if !csv_path.exists() {
            let mut writer = csv::Writer::from_path(&csv_path)
                .with_context(|| format!("Failed to create {}", csv_path.display()))?;
            writer.write_record(HEADER)?;
            writer.flush()?;
        }

        Ok(Self { csv_path })
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Append one record to the log.
    pub fn append(&self, record: &FeedbackRecord) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Failed to open {}", self.csv_path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .context("Failed to write feedback record")?;
        writer.flush()?;
        Ok(())
    }

    /// Read the full log, oldest first.
    pub fn read_all(&self) -> Result<Vec<FeedbackRecord>> {
        if !self.csv_path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.csv_path)
            .with_context(|| format!("Failed to open {}", self.csv_path.display()))?;
        reader
            .deserialize()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse feedback log")
    }

    /// Recompute aggregate insights from the full log.
    pub fn insights(&self) -> Result<InsightsReport> {
        let rows = self.read_all()?;

        let mut counts = SentimentCounts::default();
        for row in &rows {
            match row.predicted_sentiment.as_str() {
                "Positive" => counts.positive += 1,
                "Neutral" => counts.neutral += 1,
                "Negative" => counts.negative += 1,
                // Unrecognized labels are excluded from the tally.
                _ => {}
            }
        }

        // Denominator floored at 1 so an empty log yields 0% everywhere.
        let total = counts.total().max(1) as f64;
        let shares = SentimentShares {
            positive: round1(counts.positive as f64 * 100.0 / total),
            neutral: round1(counts.neutral as f64 * 100.0 / total),
            negative: round1(counts.negative as f64 * 100.0 / total),
        };

        let recent: Vec<FeedbackRecord> = rows.iter().rev().take(RECENT_LIMIT).cloned().collect();

        Ok(InsightsReport {
            counts,
            shares,
            recent,
        })
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
