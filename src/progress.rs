//! Progress reporting: a count-style bar over rows being scored.

use indicatif::{ProgressBar, ProgressStyle};

/// Count-style progress bar (items processed out of total), with an optional label.
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         it/s: {per_sec}  elapsed: {elapsed_precise}"
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb
}

/// `Some(bar)` when progress is enabled, else `None`.
pub fn maybe_count_progress(enabled: bool, total: usize, label: Option<&str>, default_label: &str) -> Option<ProgressBar> {
    enabled.then(|| make_count_progress(total as u64, label.unwrap_or(default_label)))
}
