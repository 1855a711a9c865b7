//! Per-directory update driver: read, decode, update, encode, write

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{Instrument, info, info_span};

use crate::config::{UpdaterConfig, descriptor_path};
use crate::descriptor::{decode, encode, update_component_descriptor};
use crate::discover::discover_directories;
use crate::version::resolver::GitResolver;

/// Update every path of the run, stopping at the first failure.
///
/// All paths share `resolver`, so a repository referenced from several
/// descriptors is only queried once when the resolver caches.
pub async fn run<R>(config: &UpdaterConfig, resolver: &R) -> Result<()>
where
    R: GitResolver + ?Sized,
{
    for path in &config.paths {
        update_path(path, resolver)
            .await
            .with_context(|| format!("error updating path {path}"))?;
    }
    Ok(())
}

/// Update one path argument (`dir` or `dir/...`).
pub async fn update_path<R>(path: &str, resolver: &R) -> Result<()>
where
    R: GitResolver + ?Sized,
{
    for dir in discover_directories(path)? {
        let span = info_span!("update", directory = %dir.display());
        update_directory(&dir, resolver).instrument(span).await?;
    }
    Ok(())
}

/// Update the descriptor inside `dir`.
///
/// The file is only replaced once the whole document has been updated and
/// encoded, and the replacement is a rename so readers never see a partial
/// file.
pub async fn update_directory<R>(dir: &Path, resolver: &R) -> Result<()>
where
    R: GitResolver + ?Sized,
{
    info!("Updating directory");
    let filename = descriptor_path(dir);

    let data = std::fs::read(&filename).with_context(|| {
        format!(
            "failed to read component descriptor file {}",
            filename.display()
        )
    })?;

    let desc = decode(&data).context("could not decode component descriptor")?;

    let desc = update_component_descriptor(&desc, resolver)
        .await
        .context("failed to update the component descriptor")?;

    let data = encode(&desc).context("failed to encode the component descriptor")?;

    replace_file(&filename, &data).context("failed to write component descriptor to disk")?;
    Ok(())
}

fn replace_file(filename: &Path, data: &[u8]) -> Result<()> {
    let dir = filename
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = std::fs::metadata(filename)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(filename)?;
    Ok(())
}
