//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes and CI logs
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use cirrus::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("function publish created");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CirrusTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show one line of a component listing: `label` followed by an
    /// optional description, colored by `enabled`.
    fn show_list_entry(&mut self, label: &str, description: Option<&str>, enabled: bool);

    /// Show the title line of a component's detail view.
    fn show_component_title(&mut self, display_name: &str, enabled: bool);

    /// Show a `role: filename` line of a component's detail view.
    fn show_file_role(&mut self, role: &str, filename: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
