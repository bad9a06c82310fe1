use log::{info, warn};

use crate::api::{AnalysisError, ANALYSIS_FAILED_MESSAGE};
use crate::models::Verdict;

#[derive(Debug, Default)]
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub exit_pending: bool,

    pub input_buffer: String,
    pub verdict: Option<Verdict>,
    pub is_analyzing: bool,
    pub error: Option<String>,

    /// Advances once per frame while analyzing, drives the spinner
    pub spinner_tick: usize,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.input_buffer.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Whether the analyze action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_analyzing && !self.input_buffer.trim().is_empty()
    }

    /// Marks a submission as started and hands back the text to send.
    ///
    /// Returns `None` without touching any state when the action is disabled.
    /// The previous verdict is kept but hidden until the new one arrives.
    pub fn start_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.is_analyzing = true;
        self.error = None;
        self.spinner_tick = 0;
        info!(
            "Submitting article for analysis ({} chars)",
            self.input_buffer.chars().count()
        );

        Some(self.input_buffer.clone())
    }

    pub fn finish_submission(&mut self, result: Result<bool, AnalysisError>) {
        match result {
            Ok(is_authentic) => {
                let verdict = Verdict::from(is_authentic);
                info!("Analysis finished: {verdict:?}");
                self.verdict = Some(verdict);
                self.error = None;
            }
            Err(e) => {
                // The cause only goes to the log; the form shows one message for every failure
                warn!("Analysis failed: {e}");
                self.verdict = None;
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }
        self.is_analyzing = false;
    }

    /// The verdict to display, never a stale one while a request is outstanding.
    pub const fn visible_verdict(&self) -> Option<Verdict> {
        if self.is_analyzing {
            None
        } else {
            self.verdict
        }
    }

    pub const fn tick(&mut self) {
        if self.is_analyzing {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }
}
