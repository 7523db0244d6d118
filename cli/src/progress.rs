use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Spinner shown while a request is in flight
pub struct RequestProgress {
    spinner: ProgressBar,
    start_time: Instant,
}

impl RequestProgress {
    pub fn start(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self {
            spinner,
            start_time: Instant::now(),
        }
    }

    /// Clear the spinner and return how long the request took
    pub fn finish(self) -> Duration {
        self.spinner.finish_and_clear();
        self.start_time.elapsed()
    }
}

/// Format a duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis} ms")
    } else if millis < 60_000 {
        format!("{:.2} seconds", duration.as_secs_f64())
    } else {
        let seconds = duration.as_secs();
        format!(
            "{} minutes {seconds_remainder} seconds",
            seconds / 60,
            seconds_remainder = seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250 ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50 seconds");
        assert_eq!(format_duration(Duration::from_secs(125)), "2 minutes 5 seconds");
    }
}
