//! Component instances bound to directories.
//!
//! A [`Component`] is created unloaded by [`Component::bind`] and becomes
//! loaded only once every declared file validates and the definition
//! parses. [`Component::create`] makes the directory first and removes it
//! again if anything after that fails.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

use super::definition::Definition;
use super::file::{BoundFile, InitContext};
use super::kind::{ComponentType, DEFINITION_ROLE};
use crate::error::{CirrusError, Result};

/// Names users may give new components.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("NAME_REGEX must compile")
});

/// Check whether `name` can be used for a new component directory.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// One directory-backed component of a given type.
#[derive(Debug, Clone)]
pub struct Component {
    kind: Arc<ComponentType>,
    path: PathBuf,
    name: String,
    is_core: bool,
    config: Option<Definition>,
    description: String,
    enabled: bool,
    files: Vec<BoundFile>,
    loaded: bool,
}

impl Component {
    /// Bind a component of type `kind` to `path`.
    ///
    /// Every file of the type is bound afresh for this component. With
    /// `load` set the load sequence runs immediately and its error is
    /// returned; without it the component stays unloaded until created.
    pub fn bind(kind: &Arc<ComponentType>, path: impl Into<PathBuf>, load: bool) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_core = path
            .parent()
            .is_some_and(|parent| same_dir(parent, kind.core_dir()));
        let files = kind.files().iter().map(|t| t.bind(&path)).collect();

        let mut component = Self {
            kind: Arc::clone(kind),
            path,
            name,
            is_core,
            config: None,
            description: String::new(),
            enabled: true,
            files,
            loaded: false,
        };

        if load {
            component.load(false)?;
        }
        Ok(component)
    }

    /// Create a new component called `name` under `out_dir`.
    ///
    /// Fails without touching the filesystem when the type is not user
    /// extendable, the name is invalid or the directory already exists.
    /// Any failure after the directory is made removes it again, along
    /// with any part of `out_dir` this call had to make.
    pub fn create(kind: &Arc<ComponentType>, name: &str, out_dir: &Path) -> Result<Self> {
        if !kind.is_user_extendable() {
            return Err(CirrusError::NotExtendable {
                kind: kind.tag().to_string(),
            });
        }
        if !is_valid_name(name) {
            return Err(CirrusError::InvalidName {
                kind: kind.tag().to_string(),
                name: name.to_string(),
            });
        }

        let mut component = Self::bind(kind, out_dir.join(name), false)?;

        let made_parents = first_missing_ancestor(out_dir).map(Rollback::new);
        fs::create_dir_all(out_dir)?;
        match fs::create_dir(&component.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if let Some(parents) = made_parents {
                    parents.commit();
                }
                return Err(CirrusError::AlreadyExists {
                    kind: kind.tag().to_string(),
                    path: component.path,
                });
            }
            Err(e) => return Err(e.into()),
        }

        let rollback = Rollback::new(component.path.clone());
        component.load(true)?;
        rollback.commit();
        if let Some(parents) = made_parents {
            parents.commit();
        }

        debug!("Created {} '{}' at {}", kind.tag(), name, component.path.display());
        Ok(component)
    }

    /// Run the load sequence.
    ///
    /// With `init_files` set, each file's initializer runs before its
    /// validation. The component is marked loaded only if every step
    /// succeeds.
    pub fn load(&mut self, init_files: bool) -> Result<()> {
        self.loaded = false;
        self.config = None;
        self.description.clear();
        self.enabled = true;

        if !self.path.is_dir() {
            return Err(CirrusError::NotADirectory {
                kind: self.kind.tag().to_string(),
                path: self.path.clone(),
            });
        }

        let ctx = InitContext {
            kind: self.kind.tag(),
            name: &self.name,
        };
        for file in &self.files {
            if init_files {
                file.init(&ctx)?;
            }
            file.validate(self.kind.tag())?;
        }

        self.load_config()?;
        self.loaded = true;
        debug!("Loaded {} '{}'", self.kind.tag(), self.name);
        Ok(())
    }

    fn load_config(&mut self) -> Result<()> {
        let definition = self.file(DEFINITION_ROLE).ok_or_else(|| {
            CirrusError::ConfigValidationError {
                message: format!("{} '{}' has no definition file", self.kind.tag(), self.name),
            }
        })?;
        let path = definition.path().to_path_buf();
        let config = Definition::from_yaml(&definition.content()?, &path)?;

        let enabled = config
            .get_bool("enabled", true)
            .ok_or_else(|| CirrusError::ConfigParseError {
                path,
                message: "'enabled' must be true or false".to_string(),
            })?;
        let description = self
            .kind
            .description_key()
            .and_then(|key| config.get_str(key))
            .unwrap_or_default()
            .to_string();

        self.enabled = enabled;
        self.description = description;
        self.config = Some(config);
        Ok(())
    }

    /// The component's type.
    pub fn kind(&self) -> &Arc<ComponentType> {
        &self.kind
    }

    /// Directory backing this component.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Component name (the directory name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this component lives in its type's built-in directory.
    pub fn is_core_component(&self) -> bool {
        self.is_core
    }

    /// Parsed definition, present once loaded.
    pub fn config(&self) -> Option<&Definition> {
        self.config.as_ref()
    }

    /// Human-readable description (empty when none is declared).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the component is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the load sequence has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Bound files in declaration order.
    pub fn files(&self) -> &[BoundFile] {
        &self.files
    }

    /// Look up a bound file by role.
    pub fn file(&self, role: &str) -> Option<&BoundFile> {
        self.files.iter().find(|f| f.role() == role)
    }

    /// Look up a bound file by role, failing with an unknown-file error.
    pub fn require_file(&self, role: &str) -> Result<&BoundFile> {
        self.file(role).ok_or_else(|| CirrusError::UnknownFile {
            component: self.name.clone(),
            role: role.to_string(),
        })
    }

    /// Attributes shown next to the name.
    pub fn display_attrs(&self) -> Vec<&'static str> {
        let mut attrs = Vec::new();
        if !self.enabled {
            attrs.push("DISABLED");
        }
        if self.is_core {
            attrs.push("built-in");
        }
        attrs
    }

    /// Name followed by its bracketed attributes, e.g. `publish (built-in)`.
    pub fn display_name(&self) -> String {
        let attrs = self.display_attrs();
        if attrs.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, attrs.join(", "))
        }
    }
}

/// Removes a freshly created directory unless committed.
struct Rollback {
    path: PathBuf,
    armed: bool,
}

impl Rollback {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for Rollback {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => debug!("Rolled back {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove '{}': {}", self.path.display(), e),
        }
    }
}

/// The outermost missing directory on the way down to `dir`, if any.
fn first_missing_ancestor(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
        .last()
        .map(Path::to_path_buf)
}

/// Compare two directories, resolving them when both exist.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
