use crate::ports::ProgressPort;
use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressBarAdapter {
    bar: ProgressBar,
    quiet: bool,
}

impl ProgressBarAdapter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{msg} {wide_bar:.green/white} {pos}/{len} [{elapsed}]")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar, quiet: false }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        if quiet {
            self.bar = ProgressBar::hidden();
        }
        self
    }
}

impl Default for ProgressBarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressPort for ProgressBarAdapter {
    fn start(&self, total: u64) {
        if self.quiet {
            return;
        }

        self.bar.set_length(total);
        self.bar.set_message(format!("Hashing {} candidates", total));
        self.bar.enable_steady_tick(std::time::Duration::from_millis(100));
    }

    fn update(&self, processed: u64) {
        if self.quiet {
            return;
        }

        self.bar.set_position(processed);
    }

    fn finish(&self) {
        if self.quiet {
            return;
        }

        self.bar.disable_steady_tick();
        self.bar.finish_and_clear();
    }
}

/// Progress sink for library callers and tests.
pub struct NoProgress;

impl ProgressPort for NoProgress {
    fn start(&self, _total: u64) {}

    fn update(&self, _processed: u64) {}

    fn finish(&self) {}
}
