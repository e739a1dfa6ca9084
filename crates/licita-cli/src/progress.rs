use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for a long-running step. `None` when progress output is disabled
/// (non-TTY, `--quiet`, or JSON output).
#[must_use]
pub fn spinner(message: &str) -> Option<ProgressBar> {
    if !crate::ui::prefs().progress {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    Some(bar)
}

pub fn finish(bar: Option<ProgressBar>, message: &str) {
    if let Some(bar) = bar {
        bar.finish_with_message(message.to_string());
    }
}
