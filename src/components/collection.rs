//! Name-keyed collections of components.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::component::Component;
use super::discovery::Discovery;
use super::kind::ComponentType;
use crate::error::{CirrusError, Result};

/// All components of one type visible to a project.
///
/// Components are keyed by name. When the same name is found in more than
/// one search directory the later directory wins, so project components
/// shadow built-ins.
#[derive(Debug, Clone)]
pub struct ComponentCollection {
    kind: Arc<ComponentType>,
    user_dir: PathBuf,
    elements: BTreeMap<String, Component>,
}

impl ComponentCollection {
    /// Load the collection for `kind`.
    ///
    /// `user_dir` receives newly created components and is searched after
    /// the built-ins; `extra_dirs` are searched after that.
    pub fn load(kind: &Arc<ComponentType>, user_dir: &Path, extra_dirs: &[PathBuf]) -> Self {
        let mut search_dirs = vec![user_dir.to_path_buf()];
        search_dirs.extend(extra_dirs.iter().cloned());

        let mut elements = BTreeMap::new();
        for component in Discovery::find(kind, None, &search_dirs) {
            if let Some(previous) = elements.insert(component.name().to_string(), component) {
                debug!(
                    "{} '{}' at {} is shadowed",
                    kind.tag(),
                    previous.name(),
                    previous.path().display()
                );
            }
        }

        Self {
            kind: Arc::clone(kind),
            user_dir: user_dir.to_path_buf(),
            elements,
        }
    }

    /// Collection name (e.g. `functions`).
    pub fn name(&self) -> &str {
        self.kind.collection()
    }

    /// Type of the components in this collection.
    pub fn kind(&self) -> &Arc<ComponentType> {
        &self.kind
    }

    /// Directory new components are created in.
    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// Get a component by name.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.elements.get(name)
    }

    /// Get a component by name, failing with an unknown-component error.
    pub fn require(&self, name: &str) -> Result<&Component> {
        self.get(name).ok_or_else(|| CirrusError::UnknownComponent {
            kind: self.kind.tag().to_string(),
            name: name.to_string(),
        })
    }

    /// Components in name order.
    pub fn values(&self) -> impl Iterator<Item = &Component> {
        self.elements.values()
    }

    /// Component names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a component in the user directory and add it.
    pub fn create(&mut self, name: &str) -> Result<&Component> {
        let component = Component::create(&self.kind, name, &self.user_dir)?;
        let name = component.name().to_string();
        self.elements.insert(name.clone(), component);
        self.require(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::file::{FileRule, FileTemplate, InitContext};
    use std::fs;
    use tempfile::TempDir;

    fn definition(ctx: &InitContext<'_>) -> String {
        format!("description: {}\n", ctx.name)
    }

    fn widget(home: &Path) -> Arc<ComponentType> {
        Arc::new(
            ComponentType::builder("Widget", home)
                .file(
                    FileTemplate::new("definition", "definition.yml", FileRule::Exists)
                        .with_init(definition),
                )
                .describe_from("description")
                .build(),
        )
    }

    fn write(dir: &Path, definition: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("definition.yml"), definition).unwrap();
    }

    #[test]
    fn project_component_shadows_builtin() {
        let temp = TempDir::new().unwrap();
        let kind = widget(&temp.path().join("home"));
        write(&kind.core_dir().join("knob"), "description: stock knob\n");
        write(&kind.core_dir().join("dial"), "description: stock dial\n");
        let user = temp.path().join("widgets");
        write(&user.join("knob"), "description: my knob\n");

        let collection = ComponentCollection::load(&kind, &user, &[]);

        assert_eq!(collection.name(), "widgets");
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["dial", "knob"]);
        let knob = collection.get("knob").unwrap();
        assert_eq!(knob.description(), "my knob");
        assert!(!knob.is_core_component());
        assert!(collection.get("dial").unwrap().is_core_component());
    }

    #[test]
    fn extra_dirs_are_searched_last() {
        let temp = TempDir::new().unwrap();
        let kind = widget(&temp.path().join("home"));
        let user = temp.path().join("widgets");
        write(&user.join("knob"), "description: project\n");
        let extra = temp.path().join("shared");
        write(&extra.join("knob"), "description: shared\n");

        let collection = ComponentCollection::load(&kind, &user, &[extra]);
        assert_eq!(collection.get("knob").unwrap().description(), "shared");
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn create_adds_component() {
        let temp = TempDir::new().unwrap();
        let kind = widget(&temp.path().join("home"));
        let user = temp.path().join("widgets");
        let mut collection = ComponentCollection::load(&kind, &user, &[]);
        assert!(collection.is_empty());

        let created = collection.create("lever").unwrap();
        assert_eq!(created.description(), "lever");
        assert!(user.join("lever").join("definition.yml").is_file());
        assert!(collection.get("lever").is_some());
    }

    #[test]
    fn require_unknown_component() {
        let temp = TempDir::new().unwrap();
        let kind = widget(&temp.path().join("home"));
        let collection = ComponentCollection::load(&kind, &temp.path().join("widgets"), &[]);

        let err = collection.require("missing").unwrap_err();
        assert_eq!(err.to_string(), "Unknown widget 'missing'");
    }
}
