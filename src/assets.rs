/// Asset host: URL resolution and payload fetching
///
/// Media URLs in the content are paths relative to a fixed asset base. The
/// only payload the viewer ever downloads is lottie animation JSON; images and
/// videos are shown as framed references.
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::error::AssetError;

/// Resolve a content path against the asset base
///
/// Absolute http(s) URLs pass through untouched; everything else is plain
/// concatenation.
pub fn resolve_url(base: &str, path: &str) -> String {
    if is_remote(path) {
        return path.to_string();
    }
    format!("{}{}", base, path)
}

fn is_remote(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Trait for fetching JSON payloads, implemented over HTTP and the local
/// filesystem so tests can count and fail fetches
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Fetch a resolved asset URL and parse it as JSON
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, AssetError>;
}

/// Fetches assets from a remote asset host
pub struct HttpAssetProvider {
    client: reqwest::Client,
}

impl HttpAssetProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpAssetProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetProvider for HttpAssetProvider {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, AssetError> {
        debug!("ASSET: GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

/// Reads assets from a local directory standing in for the asset host
///
/// The "URL" handed in is already resolved against the base, so it is a
/// filesystem path.
pub struct FsAssetProvider;

#[async_trait]
impl AssetProvider for FsAssetProvider {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, AssetError> {
        let path = PathBuf::from(url);
        debug!("ASSET: read {}", path.display());
        let bytes = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pick the provider matching the configured asset base
pub fn provider_for(base: &str) -> Arc<dyn AssetProvider> {
    if is_remote(base) {
        Arc::new(HttpAssetProvider::new())
    } else {
        Arc::new(FsAssetProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_url("https://assets.example.com", "/work/a.png"),
            "https://assets.example.com/work/a.png"
        );
    }

    #[test]
    fn test_resolve_absolute_url_passes_through() {
        assert_eq!(
            resolve_url("https://assets.example.com", "https://cdn.other.net/x.json"),
            "https://cdn.other.net/x.json"
        );
    }

    #[tokio::test]
    async fn test_fs_provider_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("anim.json"), r#"{"nm": "spin", "fr": 24}"#).unwrap();
        let base = dir.path().to_string_lossy().to_string();

        let provider = provider_for(&base);
        let value = provider
            .fetch_json(&resolve_url(&base, "/anim.json"))
            .await
            .unwrap();
        assert_eq!(value["nm"], "spin");
    }

    #[tokio::test]
    async fn test_fs_provider_missing_file_is_io_error() {
        let result = FsAssetProvider.fetch_json("/definitely/not/here.json").await;
        assert!(matches!(result, Err(AssetError::Io(_))));
    }

    #[tokio::test]
    async fn test_fs_provider_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = FsAssetProvider.fetch_json(&path.to_string_lossy()).await;
        assert!(matches!(result, Err(AssetError::Json(_))));
    }
}
