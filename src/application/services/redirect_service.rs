//! Short code resolution.

use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::is_valid_code;

/// Resolves codes to their targets and counts each resolution as a click.
///
/// The cache only holds `code -> long_url`. Click counts always go to the
/// link store, which is also the authority on whether a code still exists.
pub struct RedirectService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    cache: Arc<dyn CacheService>,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    pub fn new(repository: Arc<L>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Returns the long URL for `code` after recording one click.
    ///
    /// A failed increment is logged and counted but does not block the
    /// redirect. If the increment finds the link gone (deleted in the
    /// meantime), its cache entry is dropped and the code is reported missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Store`] when the initial lookup fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        let long_url = match self.cache.get_target(code).await {
            Ok(Some(url)) => url,
            Ok(None) => self.load_and_cache(code).await?,
            Err(e) => {
                warn!(code, error = %e, "Cache lookup failed");
                self.load_and_cache(code).await?
            }
        };

        match self.repository.increment_clicks(code).await {
            Ok(Some(link)) => debug!(code, clicks = link.clicks, "Click recorded"),
            Ok(None) => {
                if let Err(e) = self.cache.invalidate(code).await {
                    warn!(code, error = %e, "Failed to invalidate cache");
                }
                return Err(not_found(code));
            }
            Err(e) => {
                metrics::counter!("click_increment_failures_total").increment(1);
                warn!(code, error = %e, "Failed to record click");
            }
        }

        metrics::counter!("redirects_total").increment(1);
        Ok(long_url)
    }

    async fn load_and_cache(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        if let Err(e) = self.cache.put_target(code, &link.long_url, None).await {
            warn!(code, error = %e, "Failed to cache redirect target");
        }

        Ok(link.long_url)
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("URL not found", json!({ "code": code }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Link, OwnerToken};
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::cache::{CacheError, MockCacheService, NullCache};
    use chrono::Utc;

    fn link(code: &str, clicks: i64) -> Link {
        let now = Utc::now();
        Link::new(
            7,
            code.to_string(),
            "https://example.com/target".to_string(),
            OwnerToken::parse("owner").unwrap(),
            clicks,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn test_resolve_cache_miss_loads_and_counts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(link(code, 0))));
        repo.expect_increment_clicks()
            .times(1)
            .returning(|code| Ok(Some(link(code, 1))));

        let mut cache = MockCacheService::new();
        cache.expect_get_target().times(1).returning(|_| Ok(None));
        cache
            .expect_put_target()
            .withf(|code, url, ttl| {
                code == "AbC123" && url == "https://example.com/target" && ttl.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = RedirectService::new(Arc::new(repo), Arc::new(cache));

        let target = service.resolve("AbC123").await.unwrap();
        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_cache_hit_skips_lookup() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);
        repo.expect_increment_clicks()
            .times(1)
            .returning(|code| Ok(Some(link(code, 5))));

        let mut cache = MockCacheService::new();
        cache
            .expect_get_target()
            .returning(|_| Ok(Some("https://cached.example.com".to_string())));

        let service = RedirectService::new(Arc::new(repo), Arc::new(cache));

        assert_eq!(
            service.resolve("AbC123").await.unwrap(),
            "https://cached.example.com"
        );
    }

    #[tokio::test]
    async fn test_resolve_cache_error_falls_back_to_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(link(code, 0))));
        repo.expect_increment_clicks()
            .returning(|code| Ok(Some(link(code, 1))));

        let mut cache = MockCacheService::new();
        cache
            .expect_get_target()
            .returning(|_| Err(CacheError::Operation("down".to_string())));
        cache.expect_put_target().returning(|_, _, _| Ok(()));

        let service = RedirectService::new(Arc::new(repo), Arc::new(cache));

        assert!(service.resolve("AbC123").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(None));
        repo.expect_increment_clicks().times(0);

        let service = RedirectService::new(Arc::new(repo), Arc::new(NullCache::new()));

        let err = service.resolve("nope00").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_never_hits_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);

        let service = RedirectService::new(Arc::new(repo), Arc::new(NullCache::new()));

        for code in ["", "abc", "toolongcode", "ab$%12"] {
            assert!(matches!(
                service.resolve(code).await.unwrap_err(),
                AppError::NotFound { .. }
            ));
        }
    }

    #[tokio::test]
    async fn test_resolve_increment_failure_still_redirects() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(|code| Ok(Some(link(code, 0))));
        repo.expect_increment_clicks()
            .times(1)
            .returning(|_| Err(AppError::store("Database error", json!({}))));

        let service = RedirectService::new(Arc::new(repo), Arc::new(NullCache::new()));

        assert_eq!(
            service.resolve("AbC123").await.unwrap(),
            "https://example.com/target"
        );
    }

    #[tokio::test]
    async fn test_resolve_deleted_between_lookup_and_increment() {
        let mut repo = MockLinkRepository::new();
        repo.expect_increment_clicks().returning(|_| Ok(None));

        let mut cache = MockCacheService::new();
        cache
            .expect_get_target()
            .returning(|_| Ok(Some("https://stale.example.com".to_string())));
        cache
            .expect_invalidate()
            .withf(|code| code == "AbC123")
            .times(1)
            .returning(|_| Ok(()));

        let service = RedirectService::new(Arc::new(repo), Arc::new(cache));

        let err = service.resolve("AbC123").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_deleted_link_with_failing_invalidate() {
        let mut repo = MockLinkRepository::new();
        repo.expect_increment_clicks().returning(|_| Ok(None));

        let mut cache = MockCacheService::new();
        cache
            .expect_get_target()
            .returning(|_| Ok(Some("https://stale.example.com".to_string())));
        cache
            .expect_invalidate()
            .times(1)
            .returning(|_| Err(CacheError::Operation("down".to_string())));

        let service = RedirectService::new(Arc::new(repo), Arc::new(cache));

        let err = service.resolve("AbC123").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
