//! Search result model
//!
//! Results come from the backend's external search execution; the client
//! only renders and risk-scores them.

use serde::{Deserialize, Serialize};

/// Single result from a content search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
}

/// Body of `GET /api/search` (`{ "results": [...] }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBody {
    pub results: Vec<SearchHit>,
}
