//! Project configuration for cirrus.
//!
//! - Schema definitions in [`schema`]
//! - Project discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use cirrus::config::Project;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("cirrus.yml"), "builtins: vendor").unwrap();
//!
//! let project = Project::load(temp.path()).unwrap();
//! assert_eq!(project.builtins_root(None).unwrap(), temp.path().join("vendor"));
//! ```
//!
//! # Built-in Root Resolution
//!
//! 1. `--builtins` flag or `CIRRUS_BUILTINS`
//! 2. `builtins` in `cirrus.yml` (relative to the project root)
//! 3. `<platform data dir>/cirrus/builtins`

pub mod loader;
pub mod schema;

pub use loader::{
    default_builtins_root, find_project_root, load_settings, parse_settings, Project,
    BUILTINS_ENV, SETTINGS_FILE,
};
pub use schema::Settings;
