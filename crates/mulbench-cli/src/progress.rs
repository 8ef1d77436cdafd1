//! Suite progress display.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar sized for a suite sweep. Hidden entirely in quiet mode.
#[must_use]
pub fn suite_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
