//! Expands command-line paths into directories holding a component descriptor

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::{RECURSIVE_SUFFIX, descriptor_path};

/// Resolve one path argument into descriptor directories.
///
/// `dir` names a single directory; it is returned as is and a missing
/// descriptor is reported later when reading it. `dir/...` walks `dir`
/// recursively and returns every directory that contains a regular
/// descriptor file, in walk order.
pub fn discover_directories(path: &str) -> Result<Vec<PathBuf>> {
    let Some(root) = path.strip_suffix(RECURSIVE_SUFFIX) else {
        return Ok(vec![PathBuf::from(path)]);
    };
    let root = if root.is_empty() { "/" } else { root };

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {root}"))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if has_descriptor(entry.path())? {
            debug!(directory = %entry.path().display(), "found component descriptor");
            dirs.push(entry.into_path());
        }
    }

    Ok(dirs)
}

fn has_descriptor(dir: &Path) -> Result<bool> {
    let filename = descriptor_path(dir);
    match std::fs::metadata(&filename) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("error stat-ing {}", filename.display())),
    }
}
