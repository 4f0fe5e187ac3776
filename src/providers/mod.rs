pub mod awesome_api;
pub mod caching;

use crate::core::config::AppConfig;
use crate::core::rate::RateProvider;
use anyhow::Result;
use awesome_api::AwesomeApiProvider;
use caching::CachingRateProvider;
use std::sync::Arc;
use tracing::info;

/// Builds the rate provider stack described by the config: the upstream
/// client, wrapped in the cache when it is enabled.
pub fn build_rate_provider(config: &AppConfig) -> Result<Arc<dyn RateProvider>> {
    let upstream = AwesomeApiProvider::new(&config.provider.base_url, config.provider.timeout())?;

    if config.cache.enabled {
        info!(ttl_secs = config.cache.ttl_secs, "Rate cache enabled");
        Ok(Arc::new(CachingRateProvider::new(
            upstream,
            config.cache.ttl(),
        )))
    } else {
        info!("Rate cache disabled");
        Ok(Arc::new(upstream))
    }
}
