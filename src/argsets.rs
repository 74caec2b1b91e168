pub struct ReportArgs {
    /// Append unit labels to each value
    pub units: bool,
}
