//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use cirrus::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("functions:");
//! ui.success("function publish created");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("functions"));
//! assert!(ui.successes().contains(&"function publish created".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// A captured listing line as (label, description, enabled).
pub type ListEntry = (String, Option<String>, bool);

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    list_entries: Vec<ListEntry>,
    titles: Vec<(String, bool)>,
    file_roles: Vec<(String, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured listing lines.
    pub fn list_entries(&self) -> &[ListEntry] {
        &self.list_entries
    }

    /// Get all captured detail titles as (display name, enabled).
    pub fn titles(&self) -> &[(String, bool)] {
        &self.titles
    }

    /// Get all captured file role lines as (role, filename).
    pub fn file_roles(&self) -> &[(String, String)] {
        &self.file_roles
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.list_entries.clear();
        self.titles.clear();
        self.file_roles.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_list_entry(&mut self, label: &str, description: Option<&str>, enabled: bool) {
        self.list_entries.push((
            label.to_string(),
            description.map(str::to_string),
            enabled,
        ));
    }

    fn show_component_title(&mut self, display_name: &str, enabled: bool) {
        self.titles.push((display_name.to_string(), enabled));
    }

    fn show_file_role(&mut self, role: &str, filename: &str) {
        self.file_roles.push((role.to_string(), filename.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
