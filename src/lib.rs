mod config;
mod date;
mod util;
mod progress;

mod ndjson;
mod json_utils;
mod extractor;
mod sentiment;
mod clean;
mod table;
mod pipeline;

pub use crate::config::{PipelineOptions, CLEANED_FILE, PROCESSED_FILE};
pub use crate::pipeline::{clean_and_rescore, extract, RunOutput, TweetPipeline};

// Loader
pub use crate::ndjson::{read_json, read_json_from, NdjsonReader};

// Per-field projections and the platform timestamp helper
pub use crate::extractor::TweetExtractor;
pub use crate::date::{created_at_rfc3339, parse_created_at};

// Scoring and cleaning
pub use crate::sentiment::{Sentiment, SentimentAnalyzer};
pub use crate::clean::TextCleaner;

// Table schema and writers
pub use crate::table::{ensure_equal_lengths, CleanedFields, TableSummary, TweetRow, TweetTable, CLEANED_COLUMNS, COLUMNS};

pub use crate::util::init_tracing_once;
