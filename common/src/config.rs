pub struct Config {
    /// Verbosity reduction level.
    ///
    /// `1` hides the header and the summary, `2` hides warnings as well.
    pub quiet: u8,
    /// Emits a diagnostic for every skipped or unmatched record.
    pub verbose: bool,
}
