use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use crate::audit::ProgressPhase;

/// Progress bar driven by the audit progress callback.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct AuditProgress {
    progress_bar: ProgressBar,
}

impl AuditProgress {
    /// Creates a progress bar on stderr so it never mixes with report output.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar()
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar() -> ProgressBar {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:>9} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Reflect one progress callback.
    pub fn update(&self, phase: ProgressPhase, processed: usize, total: usize, message: &str) {
        self.progress_bar.set_prefix(phase.label());
        self.progress_bar.set_length(total as u64);
        self.progress_bar.set_position(processed as u64);
        self.progress_bar.set_message(message.to_string());
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
