//! Deterministic resolver for testing

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use component_updater::version::error::RemoteError;
use component_updater::version::resolver::GitResolver;

/// Resolver answering from a fixed table and recording every call
#[derive(Default)]
pub struct StubResolver {
    latest: HashMap<String, Option<String>>,
    calls: Mutex<Vec<String>>,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(mut self, repo_url: &str, latest: &str) -> Self {
        self.latest
            .insert(repo_url.to_string(), Some(latest.to_string()));
        self
    }

    pub fn with_no_tags(mut self, repo_url: &str) -> Self {
        self.latest.insert(repo_url.to_string(), None);
        self
    }

    /// Repository URLs queried so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitResolver for StubResolver {
    async fn resolve_latest(&self, repo_url: &str) -> Result<Option<String>, RemoteError> {
        self.calls.lock().unwrap().push(repo_url.to_string());
        match self.latest.get(repo_url) {
            Some(latest) => Ok(latest.clone()),
            None => Err(RemoteError::NotFound(repo_url.to_string())),
        }
    }
}
