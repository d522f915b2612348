//! File roles declared by component types.
//!
//! A [`FileTemplate`] is declared once on a component type and never
//! mutated. Each component binds its own [`BoundFile`] copy of every
//! template, pairing it with the concrete path inside the component
//! directory.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CirrusError, Result};

/// Context handed to a file initializer when a component is created.
#[derive(Debug, Clone, Copy)]
pub struct InitContext<'a> {
    /// Type tag of the component being created (e.g. `function`).
    pub kind: &'a str,
    /// Name of the component being created.
    pub name: &'a str,
}

/// Produces the default content of a file on creation.
pub type Initializer = fn(&InitContext<'_>) -> String;

/// Validation rule applied to a bound file on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRule {
    /// The file must exist as a regular file.
    Exists,
    /// The file may be absent.
    Optional,
    /// The file must exist, parse as a YAML mapping and hold every listed key.
    YamlMapping {
        required_keys: &'static [&'static str],
    },
}

/// Declarative description of one file a component type expects.
#[derive(Debug, Clone, Copy)]
pub struct FileTemplate {
    role: &'static str,
    filename: &'static str,
    rule: FileRule,
    init: Option<Initializer>,
}

impl FileTemplate {
    /// Declare a file role without an initializer.
    pub const fn new(role: &'static str, filename: &'static str, rule: FileRule) -> Self {
        Self {
            role,
            filename,
            rule,
            init: None,
        }
    }

    /// Attach the initializer run when a component is created.
    pub const fn with_init(mut self, init: Initializer) -> Self {
        self.init = Some(init);
        self
    }

    /// Role this file fills (e.g. `definition`).
    pub fn role(&self) -> &'static str {
        self.role
    }

    /// File name inside the component directory.
    pub fn filename(&self) -> &'static str {
        self.filename
    }

    /// Validation rule for this file.
    pub fn rule(&self) -> FileRule {
        self.rule
    }

    /// Run the initializer, if any, without touching the filesystem.
    pub fn initial_content(&self, ctx: &InitContext<'_>) -> Option<String> {
        self.init.map(|init| init(ctx))
    }

    /// Bind a copy of this template to a component directory.
    pub fn bind(&self, component_dir: &Path) -> BoundFile {
        BoundFile {
            template: *self,
            path: component_dir.join(self.filename),
        }
    }
}

/// A file template bound to one component's directory.
#[derive(Debug, Clone)]
pub struct BoundFile {
    template: FileTemplate,
    path: PathBuf,
}

impl BoundFile {
    /// Role this file fills.
    pub fn role(&self) -> &'static str {
        self.template.role
    }

    /// Display name of the file.
    pub fn name(&self) -> &'static str {
        self.template.filename
    }

    /// Full path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The template this file was bound from.
    pub fn template(&self) -> &FileTemplate {
        &self.template
    }

    /// Check whether the file exists as a regular file.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the default content if the file is absent.
    ///
    /// Returns `true` when a file was written. Existing files are never
    /// overwritten.
    pub fn init(&self, ctx: &InitContext<'_>) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        let Some(content) = self.template.initial_content(ctx) else {
            return Ok(false);
        };
        fs::write(&self.path, content)?;
        debug!("Initialized {} file {}", self.role(), self.path.display());
        Ok(true)
    }

    /// Apply this file's validation rule.
    pub fn validate(&self, kind: &str) -> Result<()> {
        match self.template.rule {
            FileRule::Optional => {
                if self.path.exists() && !self.path.is_file() {
                    return Err(self.invalid(kind, "not a regular file"));
                }
                Ok(())
            }
            FileRule::Exists => self.require_file(kind),
            FileRule::YamlMapping { required_keys } => {
                self.require_file(kind)?;
                let content = self.content()?;
                let value: serde_yaml::Value = serde_yaml::from_str(&content)
                    .map_err(|e| self.invalid(kind, format!("invalid YAML: {}", e)))?;
                let mapping = value
                    .as_mapping()
                    .ok_or_else(|| self.invalid(kind, "expected a YAML mapping"))?;
                for key in required_keys {
                    if !mapping.contains_key(*key) {
                        return Err(self.invalid(kind, format!("missing key '{}'", key)));
                    }
                }
                Ok(())
            }
        }
    }

    /// Read the file content.
    pub fn content(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Render the file for display.
    pub fn render(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot show '{}'", self.path.display()))?;
        Ok(content)
    }

    fn require_file(&self, kind: &str) -> Result<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(self.invalid(kind, "file does not exist"))
        }
    }

    fn invalid(&self, kind: &str, reason: impl Into<String>) -> CirrusError {
        CirrusError::FileValidation {
            kind: kind.to_string(),
            role: self.role().to_string(),
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn greeting(ctx: &InitContext<'_>) -> String {
        format!("# {} {}\n", ctx.kind, ctx.name)
    }

    const README: FileTemplate =
        FileTemplate::new("readme", "README.md", FileRule::Exists).with_init(greeting);

    const STATES: FileTemplate = FileTemplate::new(
        "workflow",
        "workflow.yml",
        FileRule::YamlMapping {
            required_keys: &["StartAt", "States"],
        },
    );

    fn ctx() -> InitContext<'static> {
        InitContext {
            kind: "function",
            name: "publish",
        }
    }

    #[test]
    fn bind_joins_filename_onto_component_dir() {
        let bound = README.bind(Path::new("/tmp/functions/publish"));
        assert_eq!(bound.path(), Path::new("/tmp/functions/publish/README.md"));
        assert_eq!(bound.role(), "readme");
        assert_eq!(bound.name(), "README.md");
    }

    #[test]
    fn init_writes_default_content() {
        let temp = TempDir::new().unwrap();
        let bound = README.bind(temp.path());

        assert!(bound.init(&ctx()).unwrap());
        assert_eq!(bound.content().unwrap(), "# function publish\n");
    }

    #[test]
    fn init_never_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "custom").unwrap();
        let bound = README.bind(temp.path());

        assert!(!bound.init(&ctx()).unwrap());
        assert_eq!(bound.content().unwrap(), "custom");
    }

    #[test]
    fn init_without_initializer_is_noop() {
        let temp = TempDir::new().unwrap();
        let bound = STATES.bind(temp.path());

        assert!(!bound.init(&ctx()).unwrap());
        assert!(!bound.exists());
    }

    #[test]
    fn exists_rule_rejects_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = README.bind(temp.path()).validate("function").unwrap_err();
        match err {
            CirrusError::FileValidation { role, reason, .. } => {
                assert_eq!(role, "readme");
                assert_eq!(reason, "file does not exist");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn optional_rule_accepts_missing_file() {
        let temp = TempDir::new().unwrap();
        let notes = FileTemplate::new("notes", "NOTES.md", FileRule::Optional);
        assert!(notes.bind(temp.path()).validate("function").is_ok());
    }

    #[test]
    fn optional_rule_rejects_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("NOTES.md")).unwrap();
        let notes = FileTemplate::new("notes", "NOTES.md", FileRule::Optional);
        assert!(notes.bind(temp.path()).validate("function").is_err());
    }

    #[test]
    fn yaml_rule_requires_listed_keys() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("workflow.yml"), "StartAt: first\n").unwrap();

        let err = STATES.bind(temp.path()).validate("workflow").unwrap_err();
        assert!(err.to_string().contains("missing key 'States'"));
    }

    #[test]
    fn yaml_rule_rejects_non_mapping() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("workflow.yml"), "- a\n- b\n").unwrap();

        let err = STATES.bind(temp.path()).validate("workflow").unwrap_err();
        assert!(err.to_string().contains("expected a YAML mapping"));
    }

    #[test]
    fn yaml_rule_accepts_complete_mapping() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("workflow.yml"),
            "StartAt: first\nStates:\n  first:\n    Type: Succeed\n",
        )
        .unwrap();

        assert!(STATES.bind(temp.path()).validate("workflow").is_ok());
    }

    #[test]
    fn render_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = README.bind(temp.path()).render().unwrap_err();
        assert!(err.to_string().contains("Cannot show"));
    }

    #[test]
    fn bound_copies_are_independent() {
        let a = README.bind(Path::new("/a"));
        let b = README.bind(Path::new("/b"));
        assert_ne!(a.path(), b.path());
        assert_eq!(README.filename(), "README.md");
    }
}
