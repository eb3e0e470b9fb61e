//! Link representations returned by the API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// A link as returned by create and list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkResponse {
    fn from(short: ShortLink) -> Self {
        Self {
            id: short.link.id,
            code: short.link.code,
            long_url: short.link.long_url,
            short_url: short.short_url,
            clicks: short.link.clicks,
            created_at: short.link.created_at,
        }
    }
}

/// A link as returned by the stats endpoint, with its last update time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatsResponse {
    #[serde(flatten)]
    pub link: LinkResponse,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkStatsResponse {
    fn from(short: ShortLink) -> Self {
        let updated_at = short.link.updated_at;
        Self {
            link: short.into(),
            updated_at,
        }
    }
}
