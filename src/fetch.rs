use std::cell::Cell;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Network seam. Production uses [`HttpTransport`]; tests swap in a stub.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
}

/// Outcome of a page fetch. A failed fetch is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Fetched { body: String, origin: Origin },
    Unavailable { reason: String },
}

/// Running totals of how fetches were served.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchStats {
    pub cache_hits: usize,
    pub network: usize,
    pub failed: usize,
}

/// Cache-first page retrieval.
pub struct PageFetcher<'a, T> {
    cache: &'a CacheStore,
    transport: T,
    stats: Cell<FetchStats>,
}

impl<'a, T: Transport> PageFetcher<'a, T> {
    pub fn new(cache: &'a CacheStore, transport: T) -> Self {
        Self { cache, transport, stats: Cell::default() }
    }

    pub fn stats(&self) -> FetchStats {
        self.stats.get()
    }

    fn record(&self, f: impl FnOnce(&mut FetchStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    /// Fetch `url`, serving from the cache when a fresh entry exists.
    ///
    /// Cache faults are logged and degrade to a network read or a skipped
    /// write. Transport failures come back as [`Page::Unavailable`] and are
    /// never cached.
    pub async fn fetch(&self, url: &str) -> Page {
        match self.cache.get(url) {
            Ok(Some(body)) => {
                debug!("Cache hit for {}", url);
                self.record(|s| s.cache_hits += 1);
                return Page::Fetched { body, origin: Origin::Cache };
            }
            Ok(None) => {}
            Err(e) => warn!("Cache lookup failed for {}: {}", url, e),
        }

        info!("Fetching {}", url);
        match self.transport.get(url).await {
            Ok(body) => {
                self.record(|s| s.network += 1);
                if let Err(e) = self.cache.set(url, &body) {
                    warn!("Could not cache {}: {}", url, e);
                }
                Page::Fetched { body, origin: Origin::Network }
            }
            Err(e) => {
                warn!("Error loading {}: {}", url, e);
                self.record(|s| s.failed += 1);
                Page::Unavailable { reason: e.to_string() }
            }
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{FetchError, Transport};

    /// In-memory transport keyed by URL. Unknown URLs answer HTTP 404.
    #[derive(Default)]
    pub struct StubTransport {
        pages: HashMap<String, String>,
        failing: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        /// Make `url` fail with HTTP 503 even if a body is registered.
        pub fn failing(mut self, url: &str) -> Self {
            self.failing.push(url.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for StubTransport {
        async fn get(&self, url: &str) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            if self.failing.iter().any(|u| u == url) {
                return Err(FetchError::Status { url: url.to_string(), status: 503 });
            }
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
        }
    }
}

// ── Tests ──
