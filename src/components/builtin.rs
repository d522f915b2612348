//! Built-in components embedded at compile time.
//!
//! The `builtins/` tree mirrors the installed layout,
//! `<tag>/config/<component>/<files>`, and is copied into the built-in
//! root so the built-in components can be discovered like any others.

use anyhow::Context;
use include_dir::{include_dir, Dir};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::kind::CORE_DIR_NAME;
use crate::error::Result;

/// Embedded built-ins directory.
static BUILTINS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/builtins");

/// Names of the embedded built-in components of type `tag`.
pub fn builtin_names(tag: &str) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = core_dirs(tag)
        .flat_map(|config| config.dirs())
        .filter_map(|dir| dir.path().file_name().and_then(|n| n.to_str()))
        .collect();
    names.sort_unstable();
    names
}

/// Install every embedded built-in component missing under `root`.
///
/// Components whose directory already exists are left alone. Each
/// component is written to a hidden sibling first and renamed into place,
/// so an interrupted install never leaves a partial component behind.
/// Returns the number of components written.
pub fn install(root: &Path) -> Result<usize> {
    let mut installed = 0;

    for kind_dir in BUILTINS_DIR.dirs() {
        for config in kind_dir.dirs().filter(|d| is_core_dir(d)) {
            for component in config.dirs() {
                let target = root.join(component.path());
                if target.exists() {
                    continue;
                }
                install_component(component, &target)?;
                debug!("Installed built-in {}", target.display());
                installed += 1;
            }
        }
    }

    Ok(installed)
}

fn install_component(component: &Dir<'_>, target: &Path) -> Result<()> {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = target.with_file_name(format!(".{}.partial", name));
    remove_staging(&staging)?;

    let result = write_dir(component, &staging).and_then(|()| {
        fs::rename(&staging, target)
            .with_context(|| format!("Failed to move built-in into place at {:?}", target))?;
        Ok(())
    });
    if result.is_err() {
        if let Err(e) = remove_staging(&staging) {
            warn!("{}", e);
        }
    }
    result
}

fn remove_staging(staging: &Path) -> Result<()> {
    match fs::remove_dir_all(staging) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed to remove staging directory {:?}", staging))
            .into()),
    }
}

fn core_dirs(tag: &str) -> impl Iterator<Item = &'static Dir<'static>> + '_ {
    BUILTINS_DIR
        .dirs()
        .filter(move |d| d.path().file_name().is_some_and(|n| n == tag))
        .flat_map(|d| d.dirs())
        .filter(|d| is_core_dir(d))
}

fn is_core_dir(dir: &Dir<'_>) -> bool {
    dir.path()
        .file_name()
        .is_some_and(|n| n == CORE_DIR_NAME)
}

fn write_dir(dir: &Dir<'_>, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create built-in directory {:?}", dest))?;

    for file in dir.files() {
        let Some(name) = file.path().file_name() else {
            continue;
        };
        let path = dest.join(name);
        fs::write(&path, file.contents())
            .with_context(|| format!("Failed to install built-in file {:?}", path))?;
    }
    for sub in dir.dirs() {
        let Some(name) = sub.path().file_name() else {
            continue;
        };
        write_dir(sub, &dest.join(name))?;
    }

    Ok(())
}
