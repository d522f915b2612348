//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CirrusTheme, NonInteractiveUI, OutputMode, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: CirrusTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CirrusTheme::new()
        } else {
            CirrusTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_list_entry(&mut self, label: &str, description: Option<&str>, enabled: bool) {
        let line = self.theme.format_list_entry(label, description, enabled);
        writeln!(self.term, "{}", line).ok();
    }

    fn show_component_title(&mut self, display_name: &str, enabled: bool) {
        let line = self.theme.format_component(display_name, enabled);
        writeln!(self.term, "{}", line).ok();
    }

    fn show_file_role(&mut self, role: &str, filename: &str) {
        writeln!(self.term, "{}", self.theme.format_file_role(role, filename)).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
