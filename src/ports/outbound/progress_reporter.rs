/// ProgressReporter port for narrating a run
///
/// Narration goes to stderr in the console adapter so stdout stays free
/// for piping.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that a potentially long step has started; the next call to
    /// any other method ends it
    ///
    /// # Arguments
    /// * `message` - Description of the step
    fn report_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
