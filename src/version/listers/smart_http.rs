//! Git smart-HTTP ref advertisement lister
//!
//! Asks `<repo>/info/refs?service=git-upload-pack` for the refs a repository
//! advertises. No pack negotiation happens, so no object data is transferred.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::USER_AGENT;
use crate::version::error::RemoteError;
use crate::version::listers::pkt_line::{PktLine, decode_pkt_lines};
use crate::version::remote::{RemoteRef, RemoteTagLister, normalize_repo_url};

const ADVERTISEMENT_CONTENT_TYPE: &str = "application/x-git-upload-pack-advertisement";
const SERVICE_BANNER: &str = "# service=git-upload-pack";

/// Ref lister speaking the git smart-HTTP protocol (v0 advertisement)
pub struct SmartHttpLister {
    client: reqwest::Client,
    cancel: CancellationToken,
}

impl SmartHttpLister {
    /// Creates a lister whose requests give up after `timeout` or once `cancel` fires
    pub fn new(timeout: Duration, cancel: CancellationToken) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, cancel })
    }

    async fn fetch_advertisement(&self, url: &str) -> Result<Vec<u8>, RemoteError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(RemoteError::AuthenticationFailed(url.to_string()));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            warn!("Git server returned status {}: {}", status, url);
            return Err(RemoteError::Protocol(format!("Unexpected status: {}", status)));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if !content_type.starts_with(ADVERTISEMENT_CONTENT_TYPE) {
            return Err(RemoteError::Protocol(format!(
                "{url} is not a smart-HTTP git endpoint (content type {content_type:?})"
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl RemoteTagLister for SmartHttpLister {
    async fn list_refs(&self, repo_url: &str) -> Result<Vec<RemoteRef>, RemoteError> {
        let url = format!(
            "{}/info/refs?service=git-upload-pack",
            normalize_repo_url(repo_url)
        );
        debug!(%url, "requesting ref advertisement");

        let body = self
            .cancel
            .run_until_cancelled(self.fetch_advertisement(&url))
            .await
            .ok_or(RemoteError::Cancelled)??;

        let refs = parse_advertisement(&body)?;
        debug!(%url, count = refs.len(), "received ref advertisement");
        Ok(refs)
    }
}

/// Parses a smart-HTTP `git-upload-pack` ref advertisement.
///
/// The first data packet must be the service banner. Capabilities after the
/// NUL byte are dropped, as are peeled entries and the `capabilities^{}`
/// placeholder sent by empty repositories.
pub fn parse_advertisement(body: &[u8]) -> Result<Vec<RemoteRef>, RemoteError> {
    let mut lines = decode_pkt_lines(body)?.into_iter().filter_map(|pkt| match pkt {
        PktLine::Data(data) => Some(data),
        _ => None,
    });

    match lines.next() {
        Some(banner) if String::from_utf8_lossy(&banner).trim_end() == SERVICE_BANNER => {}
        _ => {
            return Err(RemoteError::Protocol(
                "ref advertisement is missing the service banner".to_string(),
            ));
        }
    }

    let mut refs = Vec::new();
    for data in lines {
        let line = String::from_utf8_lossy(&data);
        let line = line.trim_end_matches('\n');
        let entry = line.split('\0').next().unwrap_or_default();

        let Some((oid, name)) = entry.split_once(' ') else {
            return Err(RemoteError::Protocol(format!(
                "malformed ref advertisement line: {line:?}"
            )));
        };

        if name.ends_with("^{}") {
            continue;
        }

        refs.push(RemoteRef::new(oid, name));
    }

    Ok(refs)
}
