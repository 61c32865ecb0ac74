use crate::ui;
use std::time::{Duration, Instant};

/// Named steps of a command, reported as they start and finish
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<&'static str>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps(mut self, steps: &[&'static str]) -> Self {
        self.steps = steps.to_vec();
        self
    }

    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(step);
        }
    }

    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    /// Finish the current step with a warning instead of a check mark
    pub fn warn_step(&mut self, detail: &str) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::warning_message(&format!("{step}: {detail}"));
            self.current_step += 1;
        }
    }

    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            Self::format_duration(self.start_time.elapsed())
        ));
    }

    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.2} seconds", duration.as_secs_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_read_naturally() {
        assert_eq!(ProgressTracker::format_duration(Duration::from_millis(42)), "42 ms");
        assert_eq!(
            ProgressTracker::format_duration(Duration::from_millis(1500)),
            "1.50 seconds"
        );
    }

    #[test]
    fn steps_advance_and_stop_at_the_end() {
        let mut tracker = ProgressTracker::new("Build").with_steps(&["one", "two"]);
        tracker.complete_step();
        tracker.warn_step("skipped");
        tracker.complete_step();
        assert_eq!(tracker.current_step, 2);
    }
}
