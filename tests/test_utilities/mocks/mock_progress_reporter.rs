use std::sync::{Arc, Mutex};
use transitive_deps::prelude::*;

/// Mock ProgressReporter that records every call
///
/// Clones share the same log, so a test can hand one clone to the use case
/// and inspect the other afterwards.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages passed to `report_error`, without the prefix.
    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .iter()
            .filter_map(|m| m.strip_prefix("Error: ").map(str::to_string))
            .collect()
    }

    pub fn has_message_containing(&self, needle: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(needle))
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(match message {
            Some(m) => format!("Progress: {}/{} - {}", current, total, m),
            None => format!("Progress: {}/{}", current, total),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
