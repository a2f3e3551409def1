use std::sync::Arc;
use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::MountId;
use crate::assets::{resolve_url, AssetProvider};

/// Effect handler for asset fetches
///
/// The only payload the viewer downloads is lottie animation JSON. Each
/// fetch resolves to a `LottieLoaded` action addressed to the page mount that
/// asked for it.
pub struct LottieEffects {
    provider: Arc<dyn AssetProvider>,
    base_url: String,
}

impl LottieEffects {
    pub fn new(provider: Arc<dyn AssetProvider>, base_url: impl Into<String>) -> Self {
        Self {
            provider,
            base_url: base_url.into(),
        }
    }

    pub fn fetch_lottie(&self, mount: MountId, key: String, path: String) -> Effect {
        let provider = self.provider.clone();
        let url = resolve_url(&self.base_url, &path);
        Effect::Async(Box::pin(async move {
            debug!("LOTTIE: fetching {} for {}", url, key);
            let result = provider.fetch_json(&url).await.map_err(|e| e.to_string());
            Action::LottieLoaded { mount, key, result }
        }))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::assets::AssetProvider;
    use crate::error::AssetError;

    /// Provider that serves one canned payload and records every request
    pub struct StubProvider {
        pub payload: Option<Value>,
        pub requests: Mutex<Vec<String>>,
        pub calls: AtomicUsize,
    }

    impl StubProvider {
        pub fn serving(payload: Option<Value>) -> Self {
            Self {
                payload,
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetProvider for StubProvider {
        async fn fetch_json(&self, url: &str) -> Result<Value, AssetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(url.to_string());
            self.payload
                .clone()
                .ok_or_else(|| AssetError::InvalidAnimation(format!("no payload for {}", url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubProvider;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_resolves_against_base() {
        let provider = Arc::new(StubProvider::serving(Some(json!({"fr": 30, "op": 10}))));
        let effects = LottieEffects::new(provider.clone(), "https://assets.test");

        let Effect::Async(future) =
            effects.fetch_lottie(MountId(7), "s#1".to_string(), "/a.json".to_string())
        else {
            panic!("Expected async effect");
        };
        let action = future.await;

        assert_eq!(provider.requests.lock().unwrap().as_slice(), ["https://assets.test/a.json"]);
        match action {
            Action::LottieLoaded { mount, key, result } => {
                assert_eq!(mount, MountId(7));
                assert_eq!(key, "s#1");
                assert_eq!(result.unwrap()["fr"], 30);
            }
            other => panic!("Expected LottieLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_error_string() {
        let provider = Arc::new(StubProvider::serving(None));
        let effects = LottieEffects::new(provider, "");

        let Effect::Async(future) =
            effects.fetch_lottie(MountId(1), "k".to_string(), "/missing.json".to_string())
        else {
            panic!("Expected async effect");
        };
        match future.await {
            Action::LottieLoaded { result: Err(message), .. } => {
                assert!(message.contains("/missing.json"));
            }
            other => panic!("Expected failed load, got {:?}", other),
        }
    }
}
