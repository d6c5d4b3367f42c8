//! The output table: fixed column schema, row type, CSV/JSONL writers.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column order of the primary table. Part of the output contract.
pub const COLUMNS: [&str; 15] = [
    "created_at", "source", "original_text", "polarity", "subjectivity", "lang",
    "fav_count", "retweet_count", "screen_name", "follower_count", "friends_count",
    "sensitivity", "hashtags", "mentions", "location",
];

/// Extra columns appended by the cleaning pass.
pub const CLEANED_COLUMNS: [&str; 3] = ["cleaned_text", "polarity_cleaned", "subjectivity_cleaned"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedFields {
    pub cleaned_text: String,
    pub polarity_cleaned: f64,
    pub subjectivity_cleaned: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweetRow {
    pub created_at: String,
    pub source: String,
    pub original_text: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub lang: String,
    pub fav_count: i64,
    pub retweet_count: i64,
    pub screen_name: String,
    pub follower_count: i64,
    pub friends_count: i64,
    pub sensitivity: bool,
    pub hashtags: Vec<Value>,
    pub mentions: Vec<Value>,
    pub location: String,
    #[serde(flatten)]
    pub cleaned: Option<CleanedFields>,
}

impl TweetRow {
    /// Cells in column order. Nested arrays become compact JSON; floats keep a
    /// trailing `.0`.
    fn to_record(&self) -> Result<Vec<String>> {
        let mut rec = vec![
            self.created_at.clone(),
            self.source.clone(),
            self.original_text.clone(),
            float_cell(self.polarity),
            float_cell(self.subjectivity),
            self.lang.clone(),
            self.fav_count.to_string(),
            self.retweet_count.to_string(),
            self.screen_name.clone(),
            self.follower_count.to_string(),
            self.friends_count.to_string(),
            self.sensitivity.to_string(),
            serde_json::to_string(&self.hashtags)?,
            serde_json::to_string(&self.mentions)?,
            self.location.clone(),
        ];
        if let Some(c) = &self.cleaned {
            rec.push(c.cleaned_text.clone());
            rec.push(float_cell(c.polarity_cleaned));
            rec.push(float_cell(c.subjectivity_cleaned));
        }
        Ok(rec)
    }
}

fn float_cell(v: f64) -> String {
    format!("{v:?}")
}

/// Row count and mean scores, for run logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub mean_polarity: f64,
    pub mean_subjectivity: f64,
    pub sensitive: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TweetTable {
    rows: Vec<TweetRow>,
    cleaned: bool,
}

impl TweetTable {
    pub fn new(rows: Vec<TweetRow>) -> Self {
        Self { rows, cleaned: false }
    }

    pub fn rows(&self) -> &[TweetRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn is_cleaned(&self) -> bool { self.cleaned }

    pub fn columns(&self) -> Vec<&'static str> {
        let mut cols = COLUMNS.to_vec();
        if self.cleaned {
            cols.extend(CLEANED_COLUMNS);
        }
        cols
    }

    pub fn original_texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.original_text.as_str()).collect()
    }

    /// Attach the cleaning-pass columns. All three must have one entry per row.
    pub fn with_cleaned(
        mut self,
        cleaned_text: Vec<String>,
        polarity: Vec<f64>,
        subjectivity: Vec<f64>,
    ) -> Result<Self> {
        ensure_equal_lengths(self.rows.len(), &[
            ("cleaned_text", cleaned_text.len()),
            ("polarity_cleaned", polarity.len()),
            ("subjectivity_cleaned", subjectivity.len()),
        ])?;
        let cleaned = cleaned_text.into_iter().zip(polarity).zip(subjectivity);
        for (row, ((cleaned_text, polarity_cleaned), subjectivity_cleaned)) in self.rows.iter_mut().zip(cleaned) {
            row.cleaned = Some(CleanedFields { cleaned_text, polarity_cleaned, subjectivity_cleaned });
        }
        self.cleaned = true;
        Ok(self)
    }

    pub fn summary(&self) -> TableSummary {
        let n = self.rows.len();
        let mean = |f: fn(&TweetRow) -> f64| {
            if n == 0 { 0.0 } else { self.rows.iter().map(f).sum::<f64>() / n as f64 }
        };
        TableSummary {
            rows: n,
            mean_polarity: mean(|r| r.polarity),
            mean_subjectivity: mean(|r| r.subjectivity),
            sensitive: self.rows.iter().filter(|r| r.sensitivity).count(),
        }
    }

    /// Write as comma-separated values with a header row and no index column.
    /// The header is written even for an empty table.
    pub fn write_csv(&self, path: &Path, write_buf: usize) -> Result<()> {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::with_capacity(write_buf, file));
        w.write_record(self.columns())?;
        for row in &self.rows {
            w.write_record(row.to_record()?)?;
        }
        w.flush().with_context(|| format!("flush {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = self.rows.len(), "Table saved");
        Ok(())
    }

    /// Write each row as one JSON object per line.
    pub fn write_jsonl(&self, path: &Path, write_buf: usize) -> Result<()> {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::with_capacity(write_buf, file);
        for row in &self.rows {
            serde_json::to_writer(&mut w, row)?;
            w.write_all(b"\n")?;
        }
        w.flush().with_context(|| format!("flush {}", path.display()))?;
        Ok(())
    }
}

/// Fail with a row-count mismatch if any column's length differs from `expected`.
pub fn ensure_equal_lengths(expected: usize, columns: &[(&str, usize)]) -> Result<()> {
    for &(name, len) in columns {
        if len != expected {
            bail!("row-count mismatch: column `{name}` has {len} values, expected {expected}");
        }
    }
    Ok(())
}
