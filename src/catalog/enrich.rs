//! # Best-effort Enrichment
//!
//! Each record may name a supplementary text resource (`file`). When an
//! [`EnrichSource`] is configured, one background task per record tries to
//! read that resource and, on success, sends an [`Enrichment`] back over a
//! channel. Failures are logged and otherwise ignored: the catalog is usable
//! long before any fetch finishes, and a record without enrichment is a
//! normal record.

use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use url::Url;

use crate::catalog::loader::Catalog;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw text fetched for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub record_id: String,
    pub raw: String,
}

/// Why a single fetch produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("resource path '{0}' must be relative and stay inside the base")]
    InvalidPath(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to build url for '{path}': {source}")]
    Url {
        path: String,
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Http { url: Url, source: reqwest::Error },
    #[error("request to {url} returned status {status}")]
    Status { url: Url, status: u16 },
}

/// Where record resources are resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichSource {
    Directory(PathBuf),
    Http(Url),
}

impl EnrichSource {
    /// Interpret `base` as an `http(s)` base URL, or otherwise a directory.
    pub fn parse(base: &str) -> anyhow::Result<Self> {
        let lowered = base.to_ascii_lowercase();
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Ok(Self::Directory(PathBuf::from(base)));
        }

        let mut url =
            Url::parse(base).with_context(|| format!("Invalid enrichment base url: {base}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Unsupported enrichment base scheme: {}", url.scheme());
        }
        // `Url::join` replaces the last segment unless the base ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self::Http(url))
    }

    /// Read the resource at `relative` below this source.
    pub async fn fetch(&self, relative: &str) -> Result<String, FetchError> {
        if !is_contained(relative) {
            return Err(FetchError::InvalidPath(relative.to_string()));
        }

        match self {
            Self::Directory(dir) => {
                let path = dir.join(relative);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| FetchError::Io { path, source })
            }
            Self::Http(base) => {
                let url = base.join(relative).map_err(|source| FetchError::Url {
                    path: relative.to_string(),
                    source,
                })?;
                if !url.as_str().starts_with(base.as_str()) {
                    return Err(FetchError::InvalidPath(relative.to_string()));
                }
                let response = http_client()
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|source| FetchError::Http {
                        url: url.clone(),
                        source,
                    })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url,
                        status: status.as_u16(),
                    });
                }
                response
                    .text()
                    .await
                    .map_err(|source| FetchError::Http { url, source })
            }
        }
    }
}

fn is_contained(relative: &str) -> bool {
    if relative.is_empty() || relative.starts_with("//") || relative.starts_with("\\\\") {
        return false;
    }
    // A colon before the first separator reads as a scheme or drive letter
    let first_segment = relative.split(['/', '\\']).next().unwrap_or_default();
    if first_segment.contains(':') {
        return false;
    }
    Path::new(relative)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Outstanding enrichment fetches. Dropping this aborts whatever is still
/// running.
#[derive(Debug, Default)]
pub struct EnrichmentTasks {
    handles: Vec<JoinHandle<()>>,
}

impl EnrichmentTasks {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    /// Wait for every fetch to finish, successfully or not.
    pub async fn settle(mut self) {
        for handle in std::mem::take(&mut self.handles) {
            if let Err(e) = handle.await {
                tracing::debug!("enrichment task ended abnormally: {e}");
            }
        }
    }
}

impl Drop for EnrichmentTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Start one fetch per record that names a resource.
///
/// Must be called from within a tokio runtime. Results arrive on `tx` in
/// completion order.
pub fn spawn_enrichment(
    catalog: &Catalog,
    source: &EnrichSource,
    tx: &UnboundedSender<Enrichment>,
) -> EnrichmentTasks {
    let handles = catalog
        .iter()
        .filter_map(|record| {
            let file = record.file.clone()?;
            let record_id = record.id.clone();
            let source = source.clone();
            let tx = tx.clone();

            Some(tokio::spawn(async move {
                match source.fetch(&file).await {
                    Ok(raw) => {
                        tracing::debug!(record = %record_id, "attached supplementary text");
                        // The receiver is gone once the UI has exited
                        let _ = tx.send(Enrichment { record_id, raw });
                    }
                    Err(e) => {
                        tracing::debug!(record = %record_id, "no enrichment: {e}");
                    }
                }
            }))
        })
        .collect();

    EnrichmentTasks { handles }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_source_appends_slash() {
        let source = EnrichSource::parse("https://example.com/interviews").expect("parse");
        assert_eq!(
            source,
            EnrichSource::Http(Url::parse("https://example.com/interviews/").expect("url"))
        );
    }

    #[test]
    fn test_parse_http_source_ignores_scheme_case() {
        let source = EnrichSource::parse("HTTPS://Example.com/interviews").expect("parse");
        assert_eq!(
            source,
            EnrichSource::Http(Url::parse("https://example.com/interviews/").expect("url"))
        );
    }

    #[test]
    fn test_parse_http_source_keeps_existing_slash() {
        let source = EnrichSource::parse("http://localhost:8000/").expect("parse");
        assert_eq!(
            source,
            EnrichSource::Http(Url::parse("http://localhost:8000/").expect("url"))
        );
    }

    #[test]
    fn test_parse_directory_source() {
        let source = EnrichSource::parse("./data").expect("parse");
        assert_eq!(source, EnrichSource::Directory(PathBuf::from("./data")));
    }

    #[test]
    fn test_is_contained() {
        assert!(is_contained("E/exl.txt"));
        assert!(is_contained("./E/exl.txt"));
        assert!(!is_contained(""));
        assert!(!is_contained("../secret.txt"));
        assert!(!is_contained("E/../../secret.txt"));
        assert!(!is_contained("/etc/passwd"));
        assert!(!is_contained("http://other-host/x"));
        assert!(!is_contained("file:secret.txt"));
        assert!(!is_contained("//other-host/x"));
        assert!(!is_contained("\\\\server\\share"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_escaping_path() {
        let source = EnrichSource::Directory(PathBuf::from("."));
        let result = source.fetch("../outside.txt").await;
        assert!(matches!(result, Err(FetchError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn test_fetch_rejects_absolute_url_against_http_base() {
        let source = EnrichSource::parse("http://127.0.0.1:1/interviews").expect("parse");
        let result = source.fetch("http://127.0.0.1:1/secret.txt").await;
        assert!(matches!(result, Err(FetchError::InvalidPath(_))));

        let result = source.fetch("//127.0.0.1:1/secret.txt").await;
        assert!(matches!(result, Err(FetchError::InvalidPath(_))));

        // Backslashes are separators in http urls but not in unix paths
        let result = source.fetch("E\\..\\..\\secret.txt").await;
        assert!(matches!(result, Err(FetchError::InvalidPath(_))));
    }
}
