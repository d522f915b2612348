//! Component discovery across search directories.
//!
//! Discovery walks the built-in directory of a type and then each extra
//! search directory, binding one candidate subdirectory at a time. A
//! candidate that fails to load is logged and skipped; the scan never
//! fails as a whole.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use super::component::Component;
use super::kind::ComponentType;
use crate::error::CirrusError;

/// A candidate that was skipped because it failed to load.
#[derive(Debug)]
pub struct SkippedComponent {
    /// Directory of the candidate.
    pub path: PathBuf,
    /// Why it was skipped.
    pub error: CirrusError,
}

/// Lazy sequence of loaded components.
///
/// Candidates are bound only as the sequence is advanced, so consumers
/// may stop early. Same-named components from different directories are
/// all yielded, built-ins first.
#[derive(Debug)]
pub struct Discovery {
    kind: Arc<ComponentType>,
    name: Option<String>,
    search_dirs: VecDeque<PathBuf>,
    pending: std::vec::IntoIter<PathBuf>,
    skipped: Vec<SkippedComponent>,
}

impl Discovery {
    /// Discover components in the built-in directory, then in `extra_dirs`.
    pub fn find(kind: &Arc<ComponentType>, name: Option<&str>, extra_dirs: &[PathBuf]) -> Self {
        let search_dirs = std::iter::once(kind.core_dir().to_path_buf())
            .chain(extra_dirs.iter().cloned())
            .collect();
        Self::new(kind, name, search_dirs)
    }

    /// Discover components in a single directory.
    pub fn from_dir(kind: &Arc<ComponentType>, dir: &Path, name: Option<&str>) -> Self {
        Self::new(kind, name, VecDeque::from([dir.to_path_buf()]))
    }

    fn new(kind: &Arc<ComponentType>, name: Option<&str>, search_dirs: VecDeque<PathBuf>) -> Self {
        Self {
            kind: Arc::clone(kind),
            name: name.map(str::to_string),
            search_dirs,
            pending: Vec::new().into_iter(),
            skipped: Vec::new(),
        }
    }

    /// Candidates skipped so far, in the order they were met.
    pub fn skipped(&self) -> &[SkippedComponent] {
        &self.skipped
    }
}

impl Iterator for Discovery {
    type Item = Component;

    fn next(&mut self) -> Option<Component> {
        loop {
            if let Some(candidate) = self.pending.next() {
                match Component::bind(&self.kind, &candidate, true) {
                    Ok(component) => return Some(component),
                    Err(error) => {
                        let label = candidate
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| candidate.display().to_string());
                        warn!("Skipping '{}': {}", label, error);
                        self.skipped.push(SkippedComponent {
                            path: candidate,
                            error,
                        });
                        continue;
                    }
                }
            }

            let dir = self.search_dirs.pop_front()?;
            self.pending = candidates(&dir, self.name.as_deref()).into_iter();
        }
    }
}

/// List candidate component directories in `dir`, sorted by name.
///
/// Hidden entries and plain files are ignored. A missing or unreadable
/// directory yields no candidates.
fn candidates(dir: &Path, name: Option<&str>) -> Vec<PathBuf> {
    let dir = match dir.canonicalize() {
        Ok(dir) => dir,
        Err(e) => {
            debug!("Not searching '{}': {}", dir.display(), e);
            return Vec::new();
        }
    };
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read '{}': {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut found: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            !file_name.starts_with('.') && name.is_none_or(|n| n == file_name)
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    found.sort();

    debug!("Found {} candidate(s) in {}", found.len(), dir.display());
    found
}
