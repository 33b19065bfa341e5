pub mod cached_fetch;
pub mod policy;
pub mod ttl_cache;

pub use cached_fetch::{CacheStatus, CachedFetcher, FetchFailure, Fetched};
pub use policy::FetchPolicy;
pub use ttl_cache::{CacheEntry, TtlCache};

#[cfg(test)]
mod ttl_cache_test;
