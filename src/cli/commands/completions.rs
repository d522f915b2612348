//! Shell completions generation.
//!
//! The `cirrus completions` command generates shell completion scripts.
//! Type and collection names come from the catalog, so they complete too.

use crate::cli::args::{build_command, CompletionsArgs};
use crate::components::Catalog;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand<'a> {
    catalog: &'a Catalog,
    args: CompletionsArgs,
}

impl<'a> CompletionsCommand<'a> {
    /// Create a new completions command.
    pub fn new(catalog: &'a Catalog, args: CompletionsArgs) -> Self {
        Self { catalog, args }
    }

    /// Write the completion script for the requested shell.
    pub fn generate(&self, out: &mut dyn std::io::Write) {
        let mut cmd = build_command(self.catalog);
        clap_complete::generate(self.args.shell, &mut cmd, "cirrus", out);
    }
}

impl Command for CompletionsCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        self.generate(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
