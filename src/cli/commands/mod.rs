//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`cirrus create`, `cirrus show`)
//! - Shared project and catalog setup
//! - Consistent global flag handling

pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
