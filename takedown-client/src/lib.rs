//! Takedown Client - HTTP client for the takedown backend
//!
//! Typed access to the takedown-management API plus the `ListView`
//! controller that owns filter, pagination and fetch state for the
//! dashboard's list pages.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod list;
pub mod session;

pub use api::DashboardApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ApiTransport, NetworkTransport};
pub use list::{
    Applied, FetchResult, FetchStatus, FetchTicket, ListView, QueryIntent, Snapshot,
    SortDirection, FILTER_ALL,
};
pub use session::AuthSession;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::response::{PageBody, Pagination};
