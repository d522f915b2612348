//! Show command implementation.
//!
//! - `cirrus show <collection>` lists every component
//! - `cirrus show <collection> <name>` shows one component and its files
//! - `cirrus show <collection> <name> <file>` prints one file

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::ShowArgs;
use crate::components::{Catalog, Component, ComponentCollection};
use crate::config::Project;
use crate::error::{CirrusError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One component in a JSON listing.
#[derive(Debug, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub enabled: bool,
    pub built_in: bool,
    pub description: String,
    pub path: PathBuf,
}

impl From<&Component> for ComponentSummary {
    fn from(component: &Component) -> Self {
        Self {
            name: component.name().to_string(),
            enabled: component.is_enabled(),
            built_in: component.is_core_component(),
            description: component.description().to_string(),
            path: component.path().to_path_buf(),
        }
    }
}

/// The show command implementation.
pub struct ShowCommand<'a> {
    project: &'a Project,
    catalog: &'a Catalog,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(project: &'a Project, catalog: &'a Catalog, args: ShowArgs) -> Self {
        Self {
            project,
            catalog,
            args,
        }
    }

    fn list(&self, collection: &ComponentCollection, ui: &mut dyn UserInterface) -> Result<()> {
        if self.args.json {
            let summaries: Vec<ComponentSummary> =
                collection.values().map(ComponentSummary::from).collect();
            let output = serde_json::to_string_pretty(&summaries)
                .map_err(|e| CirrusError::Other(e.into()))?;
            ui.message(&output);
            return Ok(());
        }

        for component in collection.values() {
            let description = component.description();
            ui.show_list_entry(
                &format!("{}:", component.display_name()),
                (!description.is_empty()).then_some(description),
                component.is_enabled(),
            );
        }
        Ok(())
    }
}

/// Show a component's name, description and declared files.
fn detail(component: &Component, ui: &mut dyn UserInterface) {
    ui.show_component_title(&component.display_name(), component.is_enabled());
    if !component.description().is_empty() {
        ui.message(component.description());
    }
    ui.message("");
    ui.message("Files:");
    for file in component.files() {
        ui.show_file_role(file.role(), file.name());
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(kind) = self.catalog.by_collection(&self.args.collection) else {
            ui.error(&format!("Cannot show: unknown collection '{}'", self.args.collection));
            return Ok(CommandResult::failure(1));
        };
        let collection = self.project.collection(kind);

        let Some(name) = &self.args.name else {
            self.list(&collection, ui)?;
            return Ok(CommandResult::success());
        };

        let Some(component) = collection.get(name) else {
            ui.error(&format!("Cannot show: unknown {} '{}'", kind.tag(), name));
            return Ok(CommandResult::failure(1));
        };

        let Some(role) = &self.args.file else {
            detail(component, ui);
            return Ok(CommandResult::success());
        };

        let Some(file) = component.file(role) else {
            ui.error(&format!("Cannot show: unknown file '{}'", role));
            return Ok(CommandResult::failure(1));
        };

        match file.render() {
            Ok(content) => {
                ui.message(content.trim_end_matches('\n'));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
