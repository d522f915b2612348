//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The values accepted for
//! component types and collections depend on the [`Catalog`], so the final
//! parser is produced by [`build_command`].

use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::components::Catalog;
use crate::config::BUILTINS_ENV;

/// Cirrus - Create and inspect pipeline components.
#[derive(Debug, Parser)]
#[command(name = "cirrus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Directory holding the built-in components
    #[arg(long, global = true, env = BUILTINS_ENV, value_name = "DIR")]
    pub builtins: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new component in the project
    Create(CreateArgs),

    /// List components, or show a component or one of its files
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Component type to create
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Name of the new component
    pub name: String,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Collection to show (e.g. functions)
    pub collection: String,

    /// Component to show in detail
    pub name: Option<String>,

    /// File role to print (e.g. definition, readme)
    pub file: Option<String>,

    /// Output the listing as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Build the full parser, restricting `create` to the user-extendable type
/// tags and `show` to the collection names known to `catalog`.
pub fn build_command(catalog: &Catalog) -> clap::Command {
    let tags: Vec<String> = catalog.extendable().map(|t| t.tag().to_string()).collect();
    let collections: Vec<String> = catalog
        .types()
        .iter()
        .map(|t| t.collection().to_string())
        .collect();

    Cli::command()
        .mut_subcommand("create", |create| {
            create.mut_arg("kind", |arg| arg.value_parser(PossibleValuesParser::new(tags)))
        })
        .mut_subcommand("show", |show| {
            show.mut_arg("collection", |arg| {
                arg.value_parser(PossibleValuesParser::new(collections))
            })
        })
}
