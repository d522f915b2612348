//! Cirrus - Component framework for serverless pipeline projects.
//!
//! A cirrus project is made of components: functions, tasks, feeders and
//! workflows. Each component is a directory holding a fixed set of files
//! declared by its type. This crate composes those types, discovers and
//! validates components on disk, and scaffolds new ones.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`components`] - Component types, instances, discovery and collections
//! - [`config`] - Project discovery and `cirrus.yml` settings
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cirrus::components::{Catalog, ComponentCollection};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let catalog = Catalog::new(&temp.path().join("builtins"));
//! let task = catalog.get("task").unwrap();
//!
//! let mut tasks = ComponentCollection::load(task, &temp.path().join("tasks"), &[]);
//! tasks.create("copy-assets").unwrap();
//! assert_eq!(tasks.names().collect::<Vec<_>>(), vec!["copy-assets"]);
//! ```

pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{CirrusError, Result};
