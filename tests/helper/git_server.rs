//! Fake smart-HTTP git server built on mockito

use mockito::{Matcher, Mock, ServerGuard};

const ADVERTISEMENT_CONTENT_TYPE: &str = "application/x-git-upload-pack-advertisement";

fn pkt_line(data: &str) -> String {
    format!("{:04x}{}", data.len() + 4, data)
}

/// Build a `git-upload-pack` ref advertisement body for `refs`
pub fn advertisement(refs: &[&str]) -> String {
    let mut body = pkt_line("# service=git-upload-pack\n");
    body.push_str("0000");
    for (i, name) in refs.iter().enumerate() {
        let oid = format!("{:040x}", i + 1);
        if i == 0 {
            body.push_str(&pkt_line(&format!("{oid} {name}\0side-band-64k ofs-delta\n")));
        } else {
            body.push_str(&pkt_line(&format!("{oid} {name}\n")));
        }
    }
    body.push_str("0000");
    body
}

/// Serve `refs` for `/<repo_path>/info/refs`, expecting `hits` requests
pub async fn serve_refs(
    server: &mut ServerGuard,
    repo_path: &str,
    refs: &[&str],
    hits: usize,
) -> Mock {
    server
        .mock("GET", format!("/{repo_path}/info/refs").as_str())
        .match_query(Matcher::UrlEncoded(
            "service".into(),
            "git-upload-pack".into(),
        ))
        .with_status(200)
        .with_header("content-type", ADVERTISEMENT_CONTENT_TYPE)
        .with_body(advertisement(refs))
        .expect(hits)
        .create_async()
        .await
}
