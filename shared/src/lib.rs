//! Shared types for the takedown dashboard
//!
//! Domain models, API response envelopes and auth DTOs shared between the
//! takedown-client crate and any frontend embedding it.

pub mod client;
pub mod models;
pub mod response;
pub mod risk;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{CollectionBody, ItemBody, MessageBody, PageBody, Pagination, PendingBody};
pub use risk::{classify, is_suspicious, RiskLevel};
