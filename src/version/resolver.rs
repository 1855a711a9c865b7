//! Latest version resolver trait
//!
//! Resolves the newest semantic version published as a tag of a git
//! repository.

#[cfg(test)]
use mockall::automock;

use crate::version::error::RemoteError;

/// Trait for resolving the latest released version of a repository
///
/// Implementations:
/// - [`TagResolver`](crate::version::resolvers::TagResolver): asks the remote
/// - [`CachingResolver`](crate::version::resolvers::CachingResolver): memoizes another resolver
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait GitResolver: Send + Sync {
    /// Resolve the latest version for a repository
    ///
    /// # Arguments
    /// * `repo_url` - Repository identifier without scheme (e.g., "github.com/acme/app")
    ///
    /// # Returns
    /// * `Ok(Some(version))` - Canonical version string without leading `v` (e.g., "1.2.0")
    /// * `Ok(None)` - The repository has no semantic-version tags
    /// * `Err(RemoteError)` - If the ref listing fails
    async fn resolve_latest(&self, repo_url: &str) -> Result<Option<String>, RemoteError>;
}
