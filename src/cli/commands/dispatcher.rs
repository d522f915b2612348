//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::components::Catalog;
use crate::config::Project;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project: Project,
    catalog: Catalog,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a project and its component types.
    pub fn new(project: Project, catalog: Catalog) -> Self {
        Self { project, catalog }
    }

    /// The project commands operate on.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The registered component types.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Create(args) => {
                let cmd =
                    super::create::CreateCommand::new(&self.project, &self.catalog, args.clone());
                cmd.execute(ui)
            }
            Commands::Show(args) => {
                let cmd =
                    super::show::ShowCommand::new(&self.project, &self.catalog, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(&self.catalog, args.clone());
                cmd.execute(ui)
            }
        }
    }
}
