//! Loading spinner for the input stage.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner on stderr, inert unless [`ui::UiPrefs::spinner`] is set.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Run `work` behind a spinner. The spinner is cleared on success and
    /// left showing `failure` on error.
    pub fn run<T, E>(
        message: &str,
        failure: &str,
        work: impl FnOnce(&Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let progress = Self::start(ui::prefs().spinner, message);
        let outcome = work(&progress);
        if let Some(bar) = &progress.bar {
            match &outcome {
                Ok(_) => bar.finish_and_clear(),
                Err(_) => bar.abandon_with_message(failure.to_string()),
            }
        }
        outcome
    }

    fn start(enabled: bool, message: &str) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner().with_message(message.to_string());
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self { bar }
    }

    /// Name the step now in progress.
    pub fn step(&self, message: &str) {
        tracing::debug!(step = message, "loading");
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_spinner_has_no_bar() {
        let progress = Progress::start(false, "Reading DNS exports");
        progress.step("Reading certificate scan");
        assert!(progress.bar.is_none());
    }

    #[test]
    fn run_passes_the_outcome_through() {
        let mut steps = 0;
        let ok: Result<u8, String> = Progress::run("loading", "failed", |progress| {
            progress.step("one");
            steps += 1;
            Ok(7)
        });
        assert_eq!(ok, Ok(7));
        assert_eq!(steps, 1);

        let err: Result<u8, String> =
            Progress::run("loading", "failed", |_| Err(String::from("missing scan")));
        assert_eq!(err, Err(String::from("missing scan")));
    }
}
