//! Project discovery and settings loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::components::{ComponentCollection, ComponentType};
use crate::config::schema::Settings;
use crate::error::{CirrusError, Result};

/// Name of the project settings file.
pub const SETTINGS_FILE: &str = "cirrus.yml";

/// Environment variable overriding the built-in components root.
pub const BUILTINS_ENV: &str = "CIRRUS_BUILTINS";

/// Find the project root by walking up from `start`.
///
/// The first directory holding a `cirrus.yml` wins.
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(SETTINGS_FILE).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse settings YAML.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| CirrusError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load `cirrus.yml` from a project root.
///
/// A missing file yields default settings.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    let path = project_root.join(SETTINGS_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content, &path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(CirrusError::Io(e)),
    }
}

/// Default built-in root in the platform data directory.
pub fn default_builtins_root() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("cirrus").join("builtins"))
}

/// A cirrus project: a root directory plus its settings.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    settings: Settings,
}

impl Project {
    /// Load the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            settings: load_settings(root)?,
        })
    }

    /// Create a project from already-loaded settings.
    pub fn with_settings(root: &Path, settings: Settings) -> Self {
        Self {
            root: root.to_path_buf(),
            settings,
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the built-in components root.
    ///
    /// Priority: explicit override (`--builtins` / `CIRRUS_BUILTINS`), then
    /// `builtins` in `cirrus.yml`, then the platform data directory.
    pub fn builtins_root(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.settings.builtins {
            return Ok(self.resolve(path));
        }
        default_builtins_root().ok_or_else(|| CirrusError::ConfigValidationError {
            message: format!(
                "Cannot determine where built-in components live; set {} or 'builtins' in {}",
                BUILTINS_ENV, SETTINGS_FILE
            ),
        })
    }

    /// Directory holding this project's components of `kind`.
    pub fn collection_dir(&self, kind: &ComponentType) -> PathBuf {
        self.root.join(kind.collection())
    }

    /// Extra search directories configured for `kind`.
    pub fn search_dirs(&self, kind: &ComponentType) -> Vec<PathBuf> {
        self.settings
            .search_dirs
            .get(kind.tag())
            .map(|dirs| dirs.iter().map(|d| self.resolve(d)).collect())
            .unwrap_or_default()
    }

    /// Load the collection of `kind` visible to this project.
    pub fn collection(&self, kind: &Arc<ComponentType>) -> ComponentCollection {
        ComponentCollection::load(kind, &self.collection_dir(kind), &self.search_dirs(kind))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Catalog;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "").unwrap();
        let nested = temp.path().join("functions").join("publish");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_none_without_settings() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_root(&nested);
        assert!(found.map_or(true, |root| !root.starts_with(temp.path())));
    }

    #[test]
    fn missing_settings_are_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_settings(temp.path()).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_settings_are_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "search_dirs: [oops\n").unwrap();

        let err = load_settings(temp.path()).unwrap_err();
        assert!(matches!(err, CirrusError::ConfigParseError { .. }));
    }

    #[test]
    fn builtins_root_priority() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "builtins: vendor/builtins\n").unwrap();
        let project = Project::load(temp.path()).unwrap();

        assert_eq!(
            project.builtins_root(Some(Path::new("/explicit"))).unwrap(),
            PathBuf::from("/explicit")
        );
        assert_eq!(
            project.builtins_root(None).unwrap(),
            temp.path().join("vendor").join("builtins")
        );
    }

    #[test]
    fn builtins_setting_is_taken_literally() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILE),
            "builtins: /opt/cirrus/builtins\n",
        )
        .unwrap();
        let absolute = Project::load(temp.path()).unwrap();
        assert_eq!(
            absolute.builtins_root(None).unwrap(),
            PathBuf::from("/opt/cirrus/builtins")
        );

        fs::write(temp.path().join(SETTINGS_FILE), "builtins: ~/builtins\n").unwrap();
        let tilde = Project::load(temp.path()).unwrap();
        assert_eq!(
            tilde.builtins_root(None).unwrap(),
            temp.path().join("~").join("builtins")
        );
    }

    #[test]
    fn search_dirs_resolve_against_root() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILE),
            "search_dirs:\n  function: [shared, /abs/functions]\n",
        )
        .unwrap();
        let project = Project::load(temp.path()).unwrap();
        let catalog = Catalog::new(&temp.path().join("builtins"));

        let function = catalog.get("function").unwrap();
        assert_eq!(
            project.search_dirs(function),
            vec![temp.path().join("shared"), PathBuf::from("/abs/functions")]
        );
        assert!(project.search_dirs(catalog.get("task").unwrap()).is_empty());
        assert_eq!(project.collection_dir(function), temp.path().join("functions"));
    }
}
