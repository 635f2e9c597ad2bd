// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    mongodb_url: String,
    database_name: String,
    cache_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_mongodb_url() -> String {
    "mongodb://localhost:27017".into()
}

fn default_database_name() -> String {
    "kawara".into()
}

fn default_cache_url() -> String {
    "redis://127.0.0.1:6379".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Every key has a
    /// development default; the hosting environment overrides them.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let mongodb_url = env::var("MONGODB_URL").unwrap_or_else(|_| default_mongodb_url());
        let database_name =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| default_database_name());
        let cache_url = env::var("CACHE_URL").unwrap_or_else(|_| default_cache_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        if database_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "MONGODB_DATABASE must not be blank".into(),
            ));
        }

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            mongodb_url,
            database_name,
            cache_url,
            listen_addr,
            allowed_origins,
        })
    }

    pub fn mongodb_url(&self) -> &str {
        &self.mongodb_url
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Endpoint of the cache service provisioned alongside the database.
    pub fn cache_url(&self) -> &str {
        &self.cache_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
