//! Command-line interface for cirrus.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{build_command, Cli, Commands, CompletionsArgs, CreateArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
