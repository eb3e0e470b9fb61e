//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, QueryService, RedirectService};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;

/// Services wired against a type-erased storage backend.
///
/// Cloning is cheap: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_service: Arc<RedirectService<dyn LinkRepository>>,
    pub query_service: Arc<QueryService<dyn LinkRepository>>,
    pub repository: Arc<dyn LinkRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Builds all services on top of one repository and one cache.
    ///
    /// `base_url` is the public origin used to compose short URLs.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        base_url: &str,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), base_url)),
            redirect_service: Arc::new(RedirectService::new(repository.clone(), cache.clone())),
            query_service: Arc::new(QueryService::new(
                repository.clone(),
                cache.clone(),
                base_url,
            )),
            repository,
            cache,
        }
    }
}
