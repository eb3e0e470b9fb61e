//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink, OwnerToken, SortOrder};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    next_id: i64,
}

/// Process-local link store.
///
/// All mutations take the write lock, so uniqueness checks and click
/// increments are atomic with respect to each other. Data is lost on restart.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.inner.read().await.links.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let link = Link::new(
            inner.next_id,
            new_link.code,
            new_link.long_url,
            new_link.owner,
            0,
            now,
            now,
        );

        inner.links.insert(link.code.clone(), link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.links.get(code).cloned())
    }

    async fn find_by_client(
        &self,
        owner: &OwnerToken,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;

        let mut links: Vec<Link> = inner
            .links
            .values()
            .filter(|link| link.is_owned_by(owner))
            .cloned()
            .collect();

        links.sort_by_key(|link| (link.created_at, link.id));
        if order == SortOrder::NewestFirst {
            links.reverse();
        }
        links.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(links)
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.links.get_mut(code).map(|link| {
            link.clicks += 1;
            link.updated_at = Utc::now();
            link.clone()
        }))
    }

    async fn delete_if_owned(&self, code: &str, owner: &OwnerToken) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        let owned = inner
            .links
            .get(code)
            .is_some_and(|link| link.is_owned_by(owner));

        if owned {
            inner.links.remove(code);
        }

        Ok(owned)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
