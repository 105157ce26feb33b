//! Sprite downloads for the views.
//!
//! Images are returned as `data:` URLs so the webview can show them without
//! network access of its own. Downloads are bounded by a semaphore, cached
//! by URL for the lifetime of the service and abandoned as soon as the
//! requesting view cancels its token.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use base64::{engine::general_purpose::STANDARD, Engine};
use dioxus_logger::tracing;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::backend::error::Error;

#[derive(Clone)]
pub struct SpriteService {
    client: pokeapi::Client,
    permits: Arc<Semaphore>,
    cache: Arc<Mutex<HashMap<String, String>>>,
}

impl SpriteService {
    pub const DEFAULT_CONCURRENCY: usize = 4;

    pub fn new(client: pokeapi::Client, concurrency: usize) -> Self {
        Self {
            client,
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Sprite at `url` as a `data:` URL
    ///
    /// Returns `Ok(None)` when `cancel` fires before the image is available.
    pub async fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<String>, Error> {
        if let Some(hit) = self.cached(url) {
            return Ok(Some(hit));
        }

        let _permit = tokio::select! {
            _ = cancel.cancelled() => return Ok(None),
            permit = self.permits.acquire() => {
                permit.map_err(|e| Error::InternalError(e.to_string()))?
            }
        };

        // Another view may have loaded it while this one waited
        if let Some(hit) = self.cached(url) {
            return Ok(Some(hit));
        }

        let sprite_client = self.client.sprite();
        let bytes = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Sprite download cancelled: {}", url);
                return Ok(None);
            }
            bytes = sprite_client.download(url) => bytes?,
        };

        let data_url = format!("data:{};base64,{}", mime_type(url), STANDARD.encode(bytes));
        self.cache_lock().insert(url.to_string(), data_url.clone());

        Ok(Some(data_url))
    }

    /// Number of sprites held in the cache.
    pub fn cached_len(&self) -> usize {
        self.cache_lock().len()
    }

    fn cached(&self, url: &str) -> Option<String> {
        self.cache_lock().get(url).cloned()
    }

    fn cache_lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn mime_type(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();

    if path.ends_with(".gif") {
        "image/gif"
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        "image/jpeg"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else {
        "image/png"
    }
}
