//! Progress display across repeated generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of runs
///
/// Hidden entirely when quiet, so callers never need to branch on it.
pub struct RunProgress {
    bar: ProgressBar,
}

impl RunProgress {
    /// Create a bar for `runs` runs
    pub fn new(runs: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(runs as u64);
            bar.set_style(RUN_STYLE.clone());
            bar
        };
        Self { bar }
    }

    /// Describe the run about to start
    pub fn start_run(&self, algorithm: Algorithm, length: i64, width: i64) {
        self.bar
            .set_message(format!("{algorithm} {length}x{width}"));
    }

    /// Mark the current run as finished
    pub fn complete_run(&self, elapsed: Duration) {
        self.bar.set_message(format!("last run {elapsed:.2?}"));
        self.bar.inc(1);
    }

    /// Number of completed runs
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All runs processed");
    }
}
