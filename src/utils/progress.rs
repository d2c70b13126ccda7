use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while a stage runs. Silent reporters draw nothing.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new_spinner(message: &str, silent: bool) -> Self {
        if silent {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }

    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_is_inert() {
        let progress = ProgressReporter::new_spinner("Reading...", true);
        assert!(progress.progress_bar.is_none());

        progress.finish_with_message("done");
        progress.finish_and_clear();
    }

    #[test]
    fn test_spinner_keeps_final_message() {
        let progress = ProgressReporter::new_spinner("Writing...", false);
        progress.finish_with_message("Wrote 3 rows");

        let pb = progress.progress_bar.as_ref().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "Wrote 3 rows");
    }
}
