//! Component types, instances and discovery.
//!
//! This module holds the component engine:
//! - [`file`] - File roles a type declares and their per-component bindings
//! - [`kind`] - Type descriptors and file-set composition
//! - [`component`] - Directory-backed instances with load/create lifecycle
//! - [`discovery`] - Lazy, failure-tolerant scanning of search directories
//! - [`collection`] - Name-keyed view of a type's components in a project
//! - [`catalog`] - The types cirrus ships with
//! - [`builtin`] - Built-in components embedded in the binary
//!
//! # Example
//!
//! ```
//! use cirrus::components::{Catalog, Component};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let catalog = Catalog::new(&temp.path().join("builtins"));
//! let function = catalog.get("function").unwrap();
//!
//! let created = Component::create(function, "publish", &temp.path().join("functions")).unwrap();
//! assert!(created.is_loaded());
//! assert_eq!(created.files().len(), 3);
//! ```

pub mod builtin;
pub mod catalog;
pub mod collection;
pub mod component;
pub mod definition;
pub mod discovery;
pub mod file;
pub mod kind;

pub use catalog::Catalog;
pub use collection::ComponentCollection;
pub use component::{is_valid_name, Component};
pub use definition::Definition;
pub use discovery::{Discovery, SkippedComponent};
pub use file::{BoundFile, FileRule, FileTemplate, InitContext, Initializer};
pub use kind::{merge_files, ComponentType, ComponentTypeBuilder, CORE_DIR_NAME, DEFINITION_ROLE};
