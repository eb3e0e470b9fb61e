//! Body of `POST /api/v1/urls`.

use serde::Deserialize;

/// Fields are optional at the JSON level so that an absent field is reported
/// as `missing_field` instead of a body parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: Option<String>,
    pub client_id: Option<String>,
}
