// src/infrastructure/cache.rs
use deadpool_redis::{Config as DeadpoolConfig, CreatePoolError, Pool, Runtime};

/// Builds the Redis cache pool from a redis URL (e.g.
/// redis://:password@host:6379/0). The pool is provisioned at startup and
/// carried in the HTTP state; no handler or repository currently reads or
/// writes through it.
pub fn init_cache_pool(url: &str) -> Result<Pool, CreatePoolError> {
    let cfg = DeadpoolConfig::from_url(url);
    cfg.create_pool(Some(Runtime::Tokio1))
}
