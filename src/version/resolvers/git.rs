//! Network-backed latest version resolver

use tracing::debug;

use crate::version::error::RemoteError;
use crate::version::remote::RemoteTagLister;
use crate::version::resolver::GitResolver;
use crate::version::semver::find_latest_tag;

/// Resolves the latest version by listing a repository's tags
///
/// Every call goes to the remote. Wrap it in a
/// [`CachingResolver`](super::CachingResolver) to query each repository once.
pub struct TagResolver<L> {
    lister: L,
}

impl<L: RemoteTagLister> TagResolver<L> {
    pub fn new(lister: L) -> Self {
        Self { lister }
    }
}

#[async_trait::async_trait]
impl<L: RemoteTagLister> GitResolver for TagResolver<L> {
    async fn resolve_latest(&self, repo_url: &str) -> Result<Option<String>, RemoteError> {
        let refs = self.lister.list_refs(repo_url).await?;
        let latest = find_latest_tag(refs.iter().map(|r| r.name.as_str()));

        debug!(
            repo_url,
            ref_count = refs.len(),
            latest = ?latest.as_ref().map(ToString::to_string),
            "resolved latest tag"
        );

        Ok(latest.map(|v| v.to_string()))
    }
}
