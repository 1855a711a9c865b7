//! Memoizing resolver wrapper

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::debug;

use crate::version::error::RemoteError;
use crate::version::resolver::GitResolver;

/// Wraps a resolver and remembers its answers for the lifetime of the value
///
/// Successful results are cached per repository URL, including "no version
/// found". Failures are never cached, so the next call retries. Entries are
/// never evicted.
///
/// The lock is held while the inner resolver runs, which makes
/// check-then-insert atomic: one URL never triggers two inner calls.
pub struct CachingResolver<R> {
    inner: R,
    latest_by_repo_url: Mutex<HashMap<String, Option<String>>>,
}

impl<R: GitResolver> CachingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            latest_by_repo_url: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped resolver
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of repositories resolved so far
    pub async fn len(&self) -> usize {
        self.latest_by_repo_url.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl<R: GitResolver> GitResolver for CachingResolver<R> {
    async fn resolve_latest(&self, repo_url: &str) -> Result<Option<String>, RemoteError> {
        let mut cache = self.latest_by_repo_url.lock().await;

        if let Some(latest) = cache.get(repo_url) {
            debug!(repo_url, "latest version served from cache");
            return Ok(latest.clone());
        }

        let latest = self.inner.resolve_latest(repo_url).await?;
        cache.insert(repo_url.to_string(), latest.clone());
        Ok(latest)
    }
}
