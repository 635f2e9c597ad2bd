// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Cache pool provisioned at startup; no request path touches it yet.
    pub cache: deadpool_redis::Pool,
}
