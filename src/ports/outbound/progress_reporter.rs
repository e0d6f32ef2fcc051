/// ProgressReporter port for user-facing progress messages
///
/// Diagnostics go through `tracing`; this port carries only what the user
/// should see while projects are analysed.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
