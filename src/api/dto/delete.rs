//! Body of `DELETE /api/v1/urls/{code}`.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub client_id: Option<String>,
}
