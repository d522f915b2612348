//! Error types for cirrus operations.
//!
//! This module defines [`CirrusError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural, validation, configuration and policy errors raised while
//!   binding or creating a component always propagate to the caller
//! - Discovery is the only place that downgrades them to a logged warning
//! - Use `anyhow::Error` (via `CirrusError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cirrus operations.
#[derive(Debug, Error)]
pub enum CirrusError {
    /// A component path is missing or is not a directory.
    #[error("Cannot load {kind} from '{path}': not a directory")]
    NotADirectory { kind: String, path: PathBuf },

    /// A component directory already exists where one was to be created.
    #[error("Cannot create {kind} at '{path}': already exists")]
    AlreadyExists { kind: String, path: PathBuf },

    /// A declared component file failed its validation rule.
    #[error("Invalid {role} file for {kind} at '{path}': {reason}")]
    FileValidation {
        kind: String,
        role: String,
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse a definition or settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Creation was attempted on a type users may not extend.
    #[error("Component {kind} does not support creation")]
    NotExtendable { kind: String },

    /// A component name that cannot be used as a directory name.
    #[error("Invalid {kind} name '{name}': use letters, digits, '-' or '_'")]
    InvalidName { kind: String, name: String },

    /// Lookup of a component type that is not registered.
    #[error("Unknown component type: {name}")]
    UnknownType { name: String },

    /// Lookup of a component name that does not exist.
    #[error("Unknown {kind} '{name}'")]
    UnknownComponent { kind: String, name: String },

    /// Lookup of a file role a component does not declare.
    #[error("Unknown file '{role}' for component '{component}'")]
    UnknownFile { component: String, role: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cirrus operations.
pub type Result<T> = std::result::Result<T, CirrusError>;
