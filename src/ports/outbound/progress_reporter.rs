/// ProgressReporter port for user-facing status while the feed is walked
///
/// Messages go to the user, not to the log; diagnostics use `tracing`.
pub trait ProgressReporter {
    /// Status line such as the query being issued or a result summary
    fn report(&self, message: &str);

    /// Page `current` of roughly `total`
    ///
    /// `total` comes from the count endpoint and is only an estimate; the
    /// walk may run past it, in which case callers pass `current` again.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Warning or failure notice; ends any progress display
    fn report_error(&self, message: &str);

    /// Final summary of a successful run; ends any progress display
    fn report_completion(&self, message: &str);
}
