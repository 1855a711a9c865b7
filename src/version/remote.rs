//! Trait for listing the refs a git remote advertises

#[cfg(test)]
use mockall::automock;

use crate::version::error::RemoteError;

/// One ref as advertised by a remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRef {
    /// Object id the ref points at (hex)
    pub oid: String,
    /// Full ref name (e.g., "refs/tags/v1.2.0")
    pub name: String,
}

impl RemoteRef {
    pub fn new(oid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            name: name.into(),
        }
    }
}

/// Trait for fetching the ref advertisement of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RemoteTagLister: Send + Sync {
    /// Lists every ref the remote advertises, branches and tags alike
    ///
    /// # Arguments
    /// * `repo_url` - Repository identifier, usually without scheme (e.g., "github.com/acme/app")
    ///
    /// # Returns
    /// * `Ok(Vec<RemoteRef>)` - Refs in advertisement order
    /// * `Err(RemoteError)` - If the remote cannot be reached or rejects the handshake
    async fn list_refs(&self, repo_url: &str) -> Result<Vec<RemoteRef>, RemoteError>;
}

/// Prefixes `https://` unless the URL already carries a scheme.
pub fn normalize_repo_url(repo_url: &str) -> String {
    let trimmed = repo_url.trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
