//! Route handlers module
//!
//! The three fixed responses the backend serves. Each handler produces a
//! typed body; serialization and status handling live in `crate::http`.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Body for `GET /`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    /// RFC 3339 timestamp, captured freshly per request
    pub timestamp: String,
    pub status: &'static str,
    /// Set by deployments that sit behind a proxy; absent otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied_by: Option<String>,
}

/// One entry of the `/api/data` item list
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DataItem {
    pub id: u32,
    pub name: String,
}

/// Body for `GET /api/data`
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub items: Vec<DataItem>,
}

/// Body for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /` — greeting, fresh timestamp, running status
pub fn root() -> RootResponse {
    RootResponse {
        message: "Hello from the test backend".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        status: "running",
        proxied_by: None,
    }
}

/// `GET /api/data` — fixed ordered item list
pub fn api_data() -> DataResponse {
    DataResponse {
        items: (1..=3)
            .map(|id| DataItem {
                id,
                name: format!("Item {id}"),
            })
            .collect(),
    }
}

/// `GET /health` — health probe, identical on every call
pub const fn health() -> HealthResponse {
    HealthResponse { status: "healthy" }
}
