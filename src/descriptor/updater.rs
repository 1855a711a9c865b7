//! Rewrites the git sources of a component descriptor to their latest tag

use tracing::{info, warn};

use crate::config::GIT_SOURCE_TYPE;
use crate::descriptor::error::UpdateError;
use crate::descriptor::types::{ComponentDescriptor, ComponentSpec, GitHubAccess};
use crate::version::resolver::GitResolver;

/// Returns an updated copy of `desc` with every source pinned to its latest tag.
///
/// For each source the resolved version `X` is written as `vX` into the
/// source version and as `refs/tags/vX` into the access ref. A source whose
/// repository is the component itself also moves the component version.
///
/// The whole document is validated before any resolution happens: one
/// non-git source rejects it without network traffic. Any error leaves the
/// caller with nothing but the original, which is never modified.
pub async fn update_component_descriptor<R>(
    desc: &ComponentDescriptor,
    resolver: &R,
) -> Result<ComponentDescriptor, UpdateError>
where
    R: GitResolver + ?Sized,
{
    let mut desc = desc.clone();
    let ComponentSpec {
        name,
        version,
        sources,
        ..
    } = &mut desc.component;

    let accesses = sources
        .iter()
        .map(|source| {
            if source.source_type != GIT_SOURCE_TYPE {
                return Err(UpdateError::UnsupportedAccessType {
                    source_name: source.name.clone(),
                    access_type: source.source_type.clone(),
                });
            }
            GitHubAccess::from_unstructured(&source.access).map_err(|e| UpdateError::Decode {
                source_name: source.name.clone(),
                source: e,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (source, mut access) in sources.iter_mut().zip(accesses) {
        let latest = resolver
            .resolve_latest(&access.repo_url)
            .await
            .map_err(|e| {
                if e.is_cancelled() {
                    UpdateError::Cancelled {
                        repo_url: access.repo_url.clone(),
                    }
                } else {
                    UpdateError::Resolve {
                        repo_url: access.repo_url.clone(),
                        source: e,
                    }
                }
            })?;

        // TODO: decide with descriptor owners whether untagged repositories
        // should be skipped instead of pinned to the bare "v" tag.
        let latest = latest.unwrap_or_else(|| {
            warn!(
                component = %name,
                repo_url = %access.repo_url,
                "No semantic version tag found, writing bare \"v\" version"
            );
            String::new()
        });
        let latest_version = format!("v{latest}");

        if source.version != latest_version {
            info!(
                component = %name,
                version = %source.version,
                latest_version = %latest,
                "Found new version"
            );
        }

        source.version = latest_version.clone();
        access.git_ref = format!("refs/tags/{latest_version}");
        source.access = access.to_unstructured().map_err(|e| UpdateError::Decode {
            source_name: source.name.clone(),
            source: e,
        })?;

        if access.repo_url == *name {
            if *version != latest_version {
                info!(
                    component = %name,
                    version = %version,
                    latest_version = %latest,
                    "Updating component descriptor version"
                );
            }
            *version = latest_version;
        }
    }

    Ok(desc)
}
