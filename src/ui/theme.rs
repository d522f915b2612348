//! Visual theme and styling.

use console::Style;

/// Cirrus's visual theme.
#[derive(Debug, Clone)]
pub struct CirrusTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
    /// Style for enabled component names (blue).
    pub enabled: Style,
    /// Style for disabled component names (red).
    pub disabled: Style,
    /// Style for file role labels (yellow).
    pub file_role: Style,
}

impl Default for CirrusTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CirrusTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            enabled: Style::new().blue(),
            disabled: Style::new().red(),
            file_role: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            enabled: Style::new(),
            disabled: Style::new(),
            file_role: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a component name, blue when enabled and red otherwise.
    pub fn format_component(&self, label: &str, enabled: bool) -> String {
        let style = if enabled { &self.enabled } else { &self.disabled };
        format!("{}", style.apply_to(label))
    }

    /// Format a listing line.
    pub fn format_list_entry(
        &self,
        label: &str,
        description: Option<&str>,
        enabled: bool,
    ) -> String {
        let name = self.format_component(label, enabled);
        match description {
            Some(description) if !description.is_empty() => format!("{} {}", name, description),
            _ => name,
        }
    }

    /// Format a `role: filename` line.
    pub fn format_file_role(&self, role: &str, filename: &str) -> String {
        format!("  {}: {}", self.file_role.apply_to(role), filename)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = CirrusTheme::plain();
        let msg = theme.format_success("Created");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Created"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = CirrusTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn list_entry_with_description() {
        let theme = CirrusTheme::plain();
        assert_eq!(
            theme.format_list_entry("publish (built-in):", Some("Publish items"), true),
            "publish (built-in): Publish items"
        );
    }

    #[test]
    fn list_entry_without_description() {
        let theme = CirrusTheme::plain();
        assert_eq!(theme.format_list_entry("old:", None, false), "old:");
        assert_eq!(theme.format_list_entry("old:", Some(""), false), "old:");
    }

    #[test]
    fn file_role_is_indented() {
        let theme = CirrusTheme::plain();
        assert_eq!(
            theme.format_file_role("handler", "lambda_function.py"),
            "  handler: lambda_function.py"
        );
    }

    #[test]
    fn colored_theme_creates_without_panic() {
        let theme = CirrusTheme::default();
        let _ = theme.format_component("publish", true);
        let _ = theme.format_component("publish", false);
    }
}
