use crate::clean::TextCleaner;
use crate::config::PipelineOptions;
use crate::extractor::TweetExtractor;
use crate::ndjson::read_json_buffered;
use crate::progress::maybe_count_progress;
use crate::sentiment::SentimentAnalyzer;
use crate::table::{ensure_equal_lengths, TweetRow, TweetTable};
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use serde_json::Value;
use std::mem::take;
use std::path::{Path, PathBuf};

/// Builder-driven two-stage pipeline: `extract` then `clean_and_rescore`.
#[derive(Clone)]
pub struct TweetPipeline {
    pub(crate) opts: PipelineOptions,
}

/// Paths and tables produced by [`TweetPipeline::run`].
#[derive(Debug)]
pub struct RunOutput {
    pub table: TweetTable,
    pub processed_path: Option<PathBuf>,
    pub cleaned_path: Option<PathBuf>,
}

impl Default for TweetPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl TweetPipeline {
    pub fn new() -> Self {
        Self { opts: PipelineOptions::default() }
    }

    pub fn with_options(opts: PipelineOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &PipelineOptions { &self.opts }

    // -------- Builder methods --------
    pub fn input(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_input(path); self }
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_out_dir(dir); self }
    pub fn save(mut self, yes: bool) -> Self { self.opts = self.opts.with_save(yes); self }
    pub fn clean(mut self, yes: bool) -> Self { self.opts = self.opts.with_clean(yes); self }
    pub fn save_cleaned(mut self, yes: bool) -> Self { self.opts = self.opts.with_save_cleaned(yes); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self { self.opts = self.opts.with_io_buffers(read_bytes, write_bytes); self }
    pub fn timestamps_rfc3339(mut self, yes: bool) -> Self { self.opts = self.opts.with_rfc3339_timestamps(yes); self }

    /// Stage 1: project every column, score `full_text`, check lengths, zip rows.
    pub fn extract(&self, tweets: &[Value]) -> Result<TweetTable> {
        let ex = TweetExtractor::new(tweets);
        let n = ex.len();

        let mut created_at = if self.opts.rfc3339_timestamps {
            ex.find_created_time_rfc3339()?
        } else {
            ex.find_created_time()?
        };
        let mut source = ex.find_source()?;
        let mut text = ex.find_full_text()?;
        let (polarity, subjectivity) = self.score(&text, "Scoring tweets");
        let mut lang = ex.find_lang()?;
        let fav_count = ex.find_favourite_count()?;
        let retweet_count = ex.find_retweet_count()?;
        let mut screen_name = ex.find_screen_name()?;
        let follower_count = ex.find_followers_count()?;
        let friends_count = ex.find_friends_count()?;
        let sensitivity = ex.is_sensitive()?;
        let mut hashtags = ex.find_hashtags()?;
        let mut mentions = ex.find_mentions()?;
        let mut location = ex.find_location();

        ensure_equal_lengths(n, &[
            ("created_at", created_at.len()),
            ("source", source.len()),
            ("original_text", text.len()),
            ("polarity", polarity.len()),
            ("subjectivity", subjectivity.len()),
            ("lang", lang.len()),
            ("fav_count", fav_count.len()),
            ("retweet_count", retweet_count.len()),
            ("screen_name", screen_name.len()),
            ("follower_count", follower_count.len()),
            ("friends_count", friends_count.len()),
            ("sensitivity", sensitivity.len()),
            ("hashtags", hashtags.len()),
            ("mentions", mentions.len()),
            ("location", location.len()),
        ])?;

        let rows: Vec<TweetRow> = (0..n)
            .map(|i| TweetRow {
                created_at: take(&mut created_at[i]),
                source: take(&mut source[i]),
                original_text: take(&mut text[i]),
                polarity: polarity[i],
                subjectivity: subjectivity[i],
                lang: take(&mut lang[i]),
                fav_count: fav_count[i],
                retweet_count: retweet_count[i],
                screen_name: take(&mut screen_name[i]),
                follower_count: follower_count[i],
                friends_count: friends_count[i],
                sensitivity: sensitivity[i],
                hashtags: take(&mut hashtags[i]),
                mentions: take(&mut mentions[i]),
                location: take(&mut location[i]),
                cleaned: None,
            })
            .collect();

        tracing::info!(rows = rows.len(), "Tweet table assembled");
        Ok(TweetTable::new(rows))
    }

    /// Stage 2: add `cleaned_text` and rescore it into
    /// `polarity_cleaned` / `subjectivity_cleaned`.
    pub fn clean_and_rescore(&self, table: TweetTable) -> Result<TweetTable> {
        let cleaned = TextCleaner::clean_all(&table.original_texts());
        let (polarity, subjectivity) = self.score(&cleaned, "Rescoring cleaned tweets");
        let out = table.with_cleaned(cleaned, polarity, subjectivity)?;
        tracing::info!(rows = out.len(), "Cleaning pass done");
        Ok(out)
    }

    fn score(&self, texts: &[String], default_label: &str) -> (Vec<f64>, Vec<f64>) {
        let analyzer = SentimentAnalyzer::new();
        let pb = maybe_count_progress(self.opts.progress, texts.len(), self.opts.progress_label.as_deref(), default_label);
        let out = analyzer.find_sentiments_with_progress(texts, pb.as_ref());
        if let Some(pb) = pb { pb.finish_with_message("done"); }
        out
    }

    /// Load the input, run both stages and write whatever the options ask for.
    pub fn run(&self) -> Result<RunOutput> {
        init_tracing_once();
        let (count, tweets) = read_json_buffered(&self.opts.input, self.opts.read_buffer_bytes)?;
        tracing::info!(count, "Extracting tweet table");

        let table = self.extract(&tweets)
            .with_context(|| format!("extract {}", self.opts.input.display()))?;

        let mut processed_path = None;
        if self.opts.save {
            std::fs::create_dir_all(&self.opts.out_dir)
                .with_context(|| format!("create {}", self.opts.out_dir.display()))?;
            let p = self.opts.processed_path();
            table.write_csv(&p, self.opts.write_buffer_bytes)?;
            processed_path = Some(p);
        }

        if !self.opts.clean {
            log_summary(&table);
            return Ok(RunOutput { table, processed_path, cleaned_path: None });
        }

        let table = self.clean_and_rescore(table)?;
        let mut cleaned_path = None;
        if self.opts.save_cleaned {
            std::fs::create_dir_all(&self.opts.out_dir)
                .with_context(|| format!("create {}", self.opts.out_dir.display()))?;
            let p = self.opts.cleaned_path();
            table.write_csv(&p, self.opts.write_buffer_bytes)?;
            cleaned_path = Some(p);
        }
        log_summary(&table);
        Ok(RunOutput { table, processed_path, cleaned_path })
    }
}

fn log_summary(table: &TweetTable) {
    let s = table.summary();
    tracing::info!(
        rows = s.rows,
        mean_polarity = s.mean_polarity,
        mean_subjectivity = s.mean_subjectivity,
        sensitive = s.sensitive,
        "Run summary"
    );
}

/// Stage 1 with default options and no progress bar.
pub fn extract(tweets: &[Value]) -> Result<TweetTable> {
    TweetPipeline::new().progress(false).extract(tweets)
}

/// Stage 2 with default options and no progress bar.
pub fn clean_and_rescore(table: TweetTable) -> Result<TweetTable> {
    TweetPipeline::new().progress(false).clean_and_rescore(table)
}
