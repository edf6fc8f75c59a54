//! Byte progress display for archive copies

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress of one file copy at a time
///
/// Hidden unless stderr is a terminal, so logs and tests stay clean.
pub struct CopyProgress {
    bar: ProgressBar,
}

impl CopyProgress {
    /// Progress that is never drawn
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Draw on stderr when it is an interactive terminal
    pub fn for_terminal(quiet: bool) -> Self {
        if quiet || !console::Term::stderr().is_term() {
            return Self::hidden();
        }

        let style = ProgressStyle::with_template(
            "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
        )
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(style);
        Self { bar }
    }

    /// Begin a copy of `total` bytes
    pub fn start(&self, label: &str, total: u64) {
        self.bar.reset();
        self.bar.set_length(total);
        self.bar.set_message(label.to_string());
    }

    pub fn inc(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
