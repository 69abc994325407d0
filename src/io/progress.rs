//! Progress display for surveys exploring from many starting cells

use crate::explore::explorer::ExplorerState;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SURVEY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Starts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tallies terminal states while a survey runs and mirrors them on a progress bar
pub struct SurveyProgress {
    bar: ProgressBar,
    completed: usize,
    exhausted: usize,
    stuck: usize,
    failed: usize,
    total_steps: usize,
}

impl SurveyProgress {
    /// Progress over `starts` explorations, drawn to stderr unless `hidden`
    pub fn new(starts: usize, hidden: bool) -> Self {
        let bar = ProgressBar::new(starts as u64);
        bar.set_style(SURVEY_STYLE.clone());
        if hidden {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        Self {
            bar,
            completed: 0,
            exhausted: 0,
            stuck: 0,
            failed: 0,
            total_steps: 0,
        }
    }

    /// Record one finished exploration
    pub fn record(&mut self, state: ExplorerState, steps: usize) {
        match state {
            ExplorerState::Completed => self.completed += 1,
            ExplorerState::Exhausted => self.exhausted += 1,
            ExplorerState::Stuck => self.stuck += 1,
            ExplorerState::Running => {}
        }
        self.total_steps += steps;
        self.advance();
    }

    /// Record one exploration that ended in an error
    pub fn record_failure(&mut self, steps: usize) {
        self.failed += 1;
        self.total_steps += steps;
        self.advance();
    }

    fn advance(&self) {
        self.bar.inc(1);
        self.bar.set_message(format!(
            "completed {} / stuck {}",
            self.completed, self.stuck
        ));
    }

    /// Explorations recorded so far
    pub const fn recorded(&self) -> usize {
        self.completed + self.exhausted + self.stuck + self.failed
    }

    /// Explorations that returned to their start
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Explorations that spent their step budget
    pub const fn exhausted(&self) -> usize {
        self.exhausted
    }

    /// Explorations left without an admissible neighbor
    pub const fn stuck(&self) -> usize {
        self.stuck
    }

    /// Explorations that ended in an error
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Mean number of steps per recorded exploration
    pub fn mean_steps(&self) -> f64 {
        let recorded = self.recorded();
        if recorded == 0 {
            return 0.0;
        }
        self.total_steps as f64 / recorded as f64
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
