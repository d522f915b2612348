//! Cirrus CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use cirrus::cli::{build_command, Cli, CommandDispatcher};
use cirrus::components::{builtin, Catalog};
use cirrus::config::{find_project_root, Project};
use cirrus::ui::{create_ui, OutputMode, UserInterface};
use cirrus::Result;
use clap::{FromArgMatches, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cirrus=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cirrus=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve the project root: `--project` as given, otherwise the nearest
/// ancestor of the current directory holding `cirrus.yml`, otherwise the
/// current directory itself.
fn project_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    let cwd = std::env::current_dir()?;
    Ok(find_project_root(&cwd).unwrap_or(cwd))
}

fn run(cli: Cli, ui: &mut dyn UserInterface) -> Result<i32> {
    let project = Project::load(&project_root(cli.project)?)?;
    let builtins_root = project.builtins_root(cli.builtins.as_deref())?;

    let installed = builtin::install(&builtins_root)?;
    if installed > 0 {
        tracing::debug!(
            "Installed {} built-in components into {}",
            installed,
            builtins_root.display()
        );
    }
    let catalog = Catalog::new(&builtins_root);

    // Parse again now that the valid type and collection names are known.
    let cli = match build_command(&catalog)
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let dispatcher = CommandDispatcher::new(project, catalog);
    Ok(dispatcher.dispatch(&cli, ui)?.exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Cirrus starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(true, output_mode);

    match run(cli, ui.as_mut()) {
        Ok(exit_code) => ExitCode::from(exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
