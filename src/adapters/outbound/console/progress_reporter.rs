use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} projects - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout free for the report itself. The per-project bar is drawn
/// with indicatif and hidden automatically when stderr is not a terminal.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// Reporter that only prints warnings and errors.
    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        slot.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            let style = ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-");
            pb.set_style(style);
            pb
        })
        .clone()
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
