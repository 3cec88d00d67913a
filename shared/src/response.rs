//! API response envelopes
//!
//! Wire shapes returned by the takedown backend. Every paginated collection
//! endpoint answers with `{ "data": [...], "pagination": {...} }`; anything
//! else is a protocol violation handled by the client crate.

use serde::{Deserialize, Serialize};

use crate::models::takedown::TakedownRequest;

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total number of items across all pages
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Current page number (1-based)
    pub current_page: u32,
    /// Items per page
    pub items_per_page: u32,
}

/// Paginated collection body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBody<T> {
    /// Items for the requested page
    pub data: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

/// Single-item body (`{ "data": {...} }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBody<T> {
    pub data: T,
}

/// Unpaginated collection body (`{ "data": [...] }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionBody<T> {
    pub data: Vec<T>,
}

/// Body of `GET /api/takedowns/pending`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingBody {
    pub count: u64,
    pub requests: Vec<TakedownRequest>,
}

/// Mutation acknowledgement (`{ "message": "..." }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
