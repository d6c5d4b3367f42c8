use std::path::{Path, PathBuf};

pub const PROCESSED_FILE: &str = "processed_tweet_data.csv";
pub const CLEANED_FILE: &str = "processed_and_cleaned_tweet_data.csv";

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub save: bool,                  // write the primary table after extraction
    pub clean: bool,                 // run the cleaning + rescoring pass
    pub save_cleaned: bool,          // write the cleaned table (only if `clean`)
    pub progress: bool,              // show progress bar while scoring
    pub progress_label: Option<String>,

    // IO tuning
    pub read_buffer_bytes: usize,
    pub write_buffer_bytes: usize,

    // output formatting
    pub rfc3339_timestamps: bool, // convert created_at to RFC 3339 strings
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test_data_100.json"),
            out_dir: PathBuf::from("."),
            save: true,
            clean: true,
            save_cleaned: true,
            progress: true,
            progress_label: None,

            read_buffer_bytes: 64 * 1024,
            write_buffer_bytes: 64 * 1024,

            rfc3339_timestamps: false,
        }
    }
}

impl PipelineOptions {
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = path.as_ref().to_path_buf();
        self
    }
    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_save(mut self, yes: bool) -> Self {
        self.save = yes;
        self
    }
    pub fn with_clean(mut self, yes: bool) -> Self {
        self.clean = yes;
        self
    }
    pub fn with_save_cleaned(mut self, yes: bool) -> Self {
        self.save_cleaned = yes;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self {
        self.read_buffer_bytes = read_bytes.max(8 * 1024);
        self.write_buffer_bytes = write_bytes.max(8 * 1024);
        self
    }
    pub fn with_rfc3339_timestamps(mut self, yes: bool) -> Self {
        self.rfc3339_timestamps = yes;
        self
    }

    pub fn processed_path(&self) -> PathBuf {
        self.out_dir.join(PROCESSED_FILE)
    }
    pub fn cleaned_path(&self) -> PathBuf {
        self.out_dir.join(CLEANED_FILE)
    }
}
