//! Create command implementation.
//!
//! `cirrus create <type> <name>` scaffolds a new component in the
//! project's collection directory for that type.

use tracing::debug;

use crate::cli::args::CreateArgs;
use crate::components::Catalog;
use crate::config::Project;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand<'a> {
    project: &'a Project,
    catalog: &'a Catalog,
    args: CreateArgs,
}

impl<'a> CreateCommand<'a> {
    /// Create a new create command.
    pub fn new(project: &'a Project, catalog: &'a Catalog, args: CreateArgs) -> Self {
        Self {
            project,
            catalog,
            args,
        }
    }
}

impl Command for CreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let kind = match self.catalog.require(&self.args.kind) {
            Ok(kind) => kind,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let mut collection = self.project.collection(kind);
        match collection.create(&self.args.name) {
            Ok(component) => {
                debug!("Created {}", component.path().display());
                ui.success(&format!("{} {} created", kind.tag(), component.name()));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
