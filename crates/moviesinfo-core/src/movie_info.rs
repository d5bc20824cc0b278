//! Movie record served by the movie info service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One movie as returned by `GET <base-url>/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    /// Assigned by the service; absent on records that were never stored.
    #[serde(default, alias = "movieInfoId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    /// ISO-8601 calendar date, e.g. `2005-06-15`.
    pub release_date: NaiveDate,
}

impl MovieInfo {
    /// Decode a response body. Any missing or mistyped field is an error.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
