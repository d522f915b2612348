//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything.
    #[default]
    Normal,
    /// Suppress success and warning messages.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages (successes, warnings).
    ///
    /// Errors and requested content (listings, file contents) are shown in
    /// every mode.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
