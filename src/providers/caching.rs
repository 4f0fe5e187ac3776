use crate::core::rate::{QuoteBook, QuoteSource, RateProvider, Rates};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

struct RateCacheEntry {
    quotes: QuoteBook,
    /// `None` when the TTL is too large to represent; the entry never expires.
    expires_at: Option<Instant>,
}

impl RateCacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

// Caching for RateProvider. The lock is held across the upstream fetch, so
// concurrent callers on a miss wait for a single refresh.
#[derive(Clone)]
pub struct CachingRateProvider<T: QuoteSource> {
    inner: T,
    ttl: Duration,
    entry: Arc<Mutex<Option<RateCacheEntry>>>,
}

impl<T: QuoteSource> CachingRateProvider<T> {
    pub fn new(inner: T, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl<T: QuoteSource + Send + Sync> RateProvider for CachingRateProvider<T> {
    async fn get_rates(&self) -> Result<Rates> {
        let mut entry = self.entry.lock().await;
        if let Some(cached) = entry.as_ref() {
            if cached.is_fresh(Instant::now()) {
                debug!("Cache hit for exchange rates");
                return Rates::from_quotes(&cached.quotes);
            }
            debug!("Cached exchange rates expired");
        } else {
            debug!("Cache miss for exchange rates");
        }

        let quotes = self.inner.fetch_quotes().await?;
        // Only a fully parsed quote book replaces the current entry
        let rates = Rates::from_quotes(&quotes)?;
        let expires_at = Instant::now().checked_add(self.ttl);
        if expires_at.is_none() {
            warn!(ttl = ?self.ttl, "Cache TTL overflows the clock, entry will not expire");
        }
        *entry = Some(RateCacheEntry { quotes, expires_at });
        debug!(ttl = ?self.ttl, "Cached fresh exchange rates");
        Ok(rates)
    }
}
