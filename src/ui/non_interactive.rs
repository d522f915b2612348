//! Non-interactive UI for pipes and CI logs.

use super::theme::CirrusTheme;
use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain, uncolored lines. Listings and file contents go to stdout
/// so they can be piped; warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: CirrusTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: CirrusTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_list_entry(&mut self, label: &str, description: Option<&str>, enabled: bool) {
        println!("{}", self.theme.format_list_entry(label, description, enabled));
    }

    fn show_component_title(&mut self, display_name: &str, enabled: bool) {
        println!("{}", self.theme.format_component(display_name, enabled));
    }

    fn show_file_role(&mut self, role: &str, filename: &str) {
        println!("{}", self.theme.format_file_role(role, filename));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn set_output_mode_changes_mode() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        ui.set_output_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
