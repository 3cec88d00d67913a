//! List view controller
//!
//! Every list page in the dashboard (history, profiles, and any other
//! paginated collection) drives one `ListView`: it owns the filter /
//! sort / page criteria and the fetch lifecycle, issues one GET per user
//! action, and publishes the result for the presentation layer to read.
//!
//! Fetching is split into two phases, `begin` and `apply`, joined by a
//! ticket sequence number. The async operations (`set_filter`, `refresh`,
//! ...) use both phases back to back; a frontend scheduling its own tasks
//! can drive them separately. A response whose sequence number is not newer
//! than the last applied one is discarded, so a slow stale response can
//! never overwrite fresher data.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiTransport;
use shared::response::Pagination;

/// Filter value meaning "no constraint"; never sent to the backend.
pub const FILTER_ALL: &str = "all";

/// Sort direction over the collection's date key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filter, sort and pagination criteria for the next fetch.
///
/// Mutated only by explicit user actions; changing a filter or the sort
/// direction always resets the page to 1, so a stale page number is never
/// combined with new criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryIntent {
    filters: BTreeMap<String, String>,
    sort: SortDirection,
    page: u32,
    page_size: u32,
}

impl QueryIntent {
    /// Create an intent with default criteria: page 1, descending by date,
    /// no filters.
    pub fn new(page_size: u32) -> Self {
        Self {
            filters: BTreeMap::new(),
            sort: SortDirection::default(),
            page: 1,
            page_size,
        }
    }

    /// Set a filter value and reset to the first page
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(name.into(), value.into());
        self.page = 1;
    }

    /// Set the sort direction and reset to the first page
    pub fn set_sort(&mut self, sort: SortDirection) {
        self.sort = sort;
        self.page = 1;
    }

    /// Set the page. Not clamped; the backend answers an out-of-range page
    /// with an empty one.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Current value of a filter, if set
    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Query pairs for the outgoing request: `page`, `limit`, `sortByDate`,
    /// then every filter not set to the `"all"` sentinel, in name order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.page_size.to_string()),
            ("sortByDate".to_string(), self.sort.as_str().to_string()),
        ];
        for (name, value) in &self.filters {
            if value != FILTER_ALL {
                query.push((name.clone(), value.clone()));
            }
        }
        query
    }
}

/// Fetch lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Outcome of the most recent fetch.
///
/// `items` and `pagination` are always replaced together; an error empties
/// both so stale rows are never shown next to an error banner.
#[derive(Debug, Clone)]
pub struct FetchResult<T> {
    pub status: FetchStatus,
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
    pub error: Option<String>,
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            items: Vec::new(),
            pagination: None,
            error: None,
        }
    }
}

/// Handle for an in-flight fetch: its sequence number and the query pairs
/// captured from the intent when the fetch began.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: Vec<(String, String)>,
}

/// What `apply` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Installed as the current result
    Fresh,
    /// Discarded: a newer response was already applied
    Stale,
}

/// Read-only view of controller state
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    pub result: &'a FetchResult<T>,
    pub intent: &'a QueryIntent,
}

/// Controller for one paginated collection endpoint.
pub struct ListView<T, C> {
    transport: Arc<C>,
    endpoint: String,
    intent: QueryIntent,
    result: FetchResult<T>,
    issued: u64,
    applied: u64,
}

impl<T, C> ListView<T, C>
where
    T: DeserializeOwned,
    C: ApiTransport,
{
    /// Create a controller bound to a collection endpoint.
    ///
    /// No fetch is issued until the first operation; the result starts
    /// `Idle` and empty.
    pub fn new(transport: Arc<C>, endpoint: impl Into<String>, page_size: u32) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            intent: QueryIntent::new(page_size),
            result: FetchResult::default(),
            issued: 0,
            applied: 0,
        }
    }

    /// Endpoint path this controller fetches from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current result plus current intent; pure read.
    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot {
            result: &self.result,
            intent: &self.intent,
        }
    }

    /// Update a filter, reset to page 1 and refetch.
    pub async fn set_filter(&mut self, name: &str, value: &str) {
        self.intent.set_filter(name, value);
        self.refetch().await;
    }

    /// Update the sort direction, reset to page 1 and refetch.
    pub async fn set_sort(&mut self, sort: SortDirection) {
        self.intent.set_sort(sort);
        self.refetch().await;
    }

    /// Move to another page and refetch. Filters and sort are untouched.
    pub async fn set_page(&mut self, page: u32) {
        self.intent.set_page(page);
        self.refetch().await;
    }

    /// Re-issue the current intent unchanged.
    pub async fn refresh(&mut self) {
        self.refetch().await;
    }

    /// Start a fetch: mark `Loading`, keep the previous rows visible, and
    /// hand out a ticket for the response.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.result.status = FetchStatus::Loading;
        self.result.error = None;
        FetchTicket {
            seq: self.issued,
            query: self.intent.to_query(),
        }
    }

    /// Install a response for ticket `seq`, unless a newer one has already
    /// been applied. Success replaces items and pagination atomically;
    /// failure (transport, API or shape) empties them. Either way the
    /// loading state ends here.
    pub fn apply(&mut self, seq: u64, outcome: ClientResult<Value>) -> Applied {
        if seq <= self.applied {
            tracing::debug!(seq, applied = self.applied, "discarding stale response");
            return Applied::Stale;
        }
        self.applied = seq;

        match outcome.and_then(|value| parse_page_body::<T>(&value)) {
            Ok((items, pagination)) => {
                tracing::debug!(
                    seq,
                    endpoint = %self.endpoint,
                    count = items.len(),
                    "list fetch succeeded"
                );
                self.result = FetchResult {
                    status: FetchStatus::Success,
                    items,
                    pagination: Some(pagination),
                    error: None,
                };
            }
            Err(err) => {
                tracing::warn!(seq, endpoint = %self.endpoint, error = %err, "list fetch failed");
                self.result = FetchResult {
                    status: FetchStatus::Error,
                    items: Vec::new(),
                    pagination: None,
                    error: Some(err.to_string()),
                };
            }
        }
        Applied::Fresh
    }

    async fn refetch(&mut self) {
        let ticket = self.begin();
        let outcome = self
            .transport
            .get::<Value>(&self.endpoint, &ticket.query)
            .await;
        self.apply(ticket.seq, outcome);
    }
}

/// Validate a paginated collection body and extract its items.
///
/// The recognized shape is an object with an array `data` field and a
/// `pagination` block; anything else is a protocol violation, never a
/// partial success.
fn parse_page_body<T: DeserializeOwned>(value: &Value) -> ClientResult<(Vec<T>, Pagination)> {
    let object = value
        .as_object()
        .ok_or_else(|| ClientError::Protocol("response body is not an object".to_string()))?;

    let data = object
        .get("data")
        .ok_or_else(|| ClientError::Protocol("response is missing the data field".to_string()))?
        .as_array()
        .ok_or_else(|| ClientError::Protocol("data field is not an array".to_string()))?;

    let pagination_value = object.get("pagination").ok_or_else(|| {
        ClientError::Protocol("response is missing the pagination block".to_string())
    })?;
    let pagination: Pagination = serde_json::from_value(pagination_value.clone())
        .map_err(|e| ClientError::Protocol(format!("malformed pagination block: {}", e)))?;

    let mut items = Vec::with_capacity(data.len());
    for item in data {
        let item: T = serde_json::from_value(item.clone())
            .map_err(|e| ClientError::Protocol(format!("malformed item in data: {}", e)))?;
        items.push(item);
    }

    Ok((items, pagination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    /// Transport stub for tests that never reach the network
    struct NullTransport;

    #[async_trait]
    impl ApiTransport for NullTransport {
        async fn get<T: DeserializeOwned>(
            &self,
            _path: &str,
            _query: &[(String, String)],
        ) -> ClientResult<T> {
            Err(ClientError::Protocol("null transport".to_string()))
        }

        async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
            &self,
            _path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            Err(ClientError::Protocol("null transport".to_string()))
        }

        async fn post_empty<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
            Err(ClientError::Protocol("null transport".to_string()))
        }

        async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
            &self,
            _path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            Err(ClientError::Protocol("null transport".to_string()))
        }

        async fn delete<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
            Err(ClientError::Protocol("null transport".to_string()))
        }
    }

    fn view() -> ListView<Value, NullTransport> {
        ListView::new(Arc::new(NullTransport), "/api/takedowns/history", 10)
    }

    fn page_body(ids: &[u32], page: u32) -> Value {
        json!({
            "data": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
            "pagination": {
                "totalItems": 50,
                "totalPages": 5,
                "currentPage": page,
                "itemsPerPage": 10
            }
        })
    }

    #[test]
    fn test_default_intent_omits_all_sentinel() {
        let mut intent = QueryIntent::new(10);
        intent.set_filter("status", FILTER_ALL);
        let query = intent.to_query();
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("sortByDate".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_filter_emits_value_and_page() {
        let mut intent = QueryIntent::new(10);
        intent.set_filter("status", "REJECTED");
        intent.set_page(2);
        let query = intent.to_query();
        assert!(query.contains(&("status".to_string(), "REJECTED".to_string())));
        assert!(query.contains(&("page".to_string(), "2".to_string())));
    }

    #[test]
    fn test_filter_and_sort_reset_page() {
        let mut intent = QueryIntent::new(10);
        intent.set_page(7);
        intent.set_filter("userId", "profile-1");
        assert_eq!(intent.page(), 1);

        intent.set_page(4);
        intent.set_sort(SortDirection::Asc);
        assert_eq!(intent.page(), 1);
    }

    #[test]
    fn test_set_page_keeps_filters_and_sort() {
        let mut intent = QueryIntent::new(10);
        intent.set_filter("status", "PENDING");
        intent.set_sort(SortDirection::Asc);
        intent.set_page(3);
        assert_eq!(intent.filter("status"), Some("PENDING"));
        assert_eq!(intent.sort(), SortDirection::Asc);
        assert_eq!(intent.page(), 3);
    }

    #[test]
    fn test_filters_emitted_in_name_order() {
        let mut intent = QueryIntent::new(10);
        intent.set_filter("userId", "profile-1");
        intent.set_filter("status", "APPROVED");
        let query = intent.to_query();
        let names: Vec<&str> = query.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["page", "limit", "sortByDate", "status", "userId"]);
    }

    #[test]
    fn test_begin_keeps_stale_rows_visible() {
        let mut view = view();
        let t1 = view.begin();
        view.apply(t1.seq, Ok(page_body(&[1, 2], 1)));
        assert_eq!(view.snapshot().result.items.len(), 2);

        let _t2 = view.begin();
        let snap = view.snapshot();
        assert_eq!(snap.result.status, FetchStatus::Loading);
        assert_eq!(snap.result.items.len(), 2);
        assert!(snap.result.error.is_none());
    }

    #[test]
    fn test_success_installs_items_and_pagination_together() {
        let mut view = view();
        let ticket = view.begin();
        assert_eq!(view.apply(ticket.seq, Ok(page_body(&[1, 2, 3], 1))), Applied::Fresh);

        let snap = view.snapshot();
        assert_eq!(snap.result.status, FetchStatus::Success);
        assert_eq!(snap.result.items.len(), 3);
        assert_eq!(snap.result.pagination.as_ref().unwrap().current_page, 1);
    }

    #[test]
    fn test_missing_pagination_is_protocol_error() {
        let mut view = view();
        let ticket = view.begin();
        view.apply(ticket.seq, Ok(json!({"data": []})));

        let snap = view.snapshot();
        assert_eq!(snap.result.status, FetchStatus::Error);
        assert!(snap.result.items.is_empty());
        assert!(snap.result.pagination.is_none());
        assert!(snap.result.error.as_ref().unwrap().contains("pagination"));
    }

    #[test]
    fn test_non_array_data_is_protocol_error() {
        let mut view = view();
        let ticket = view.begin();
        view.apply(
            ticket.seq,
            Ok(json!({"data": "nope", "pagination": {
                "totalItems": 0, "totalPages": 0, "currentPage": 1, "itemsPerPage": 10
            }})),
        );
        assert_eq!(view.snapshot().result.status, FetchStatus::Error);
        assert!(view.snapshot().result.items.is_empty());
    }

    #[test]
    fn test_empty_page_is_success_not_error() {
        let mut view = view();
        let ticket = view.begin();
        view.apply(ticket.seq, Ok(page_body(&[], 5)));

        let snap = view.snapshot();
        assert_eq!(snap.result.status, FetchStatus::Success);
        assert!(snap.result.items.is_empty());
        assert!(snap.result.error.is_none());
    }

    #[test]
    fn test_error_empties_previous_rows() {
        let mut view = view();
        let t1 = view.begin();
        view.apply(t1.seq, Ok(page_body(&[1, 2], 1)));

        let t2 = view.begin();
        view.apply(t2.seq, Err(ClientError::Unauthorized));

        let snap = view.snapshot();
        assert_eq!(snap.result.status, FetchStatus::Error);
        assert!(snap.result.items.is_empty());
        assert!(snap.result.pagination.is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = view();
        let t1 = view.begin();
        let t2 = view.begin();

        assert_eq!(view.apply(t2.seq, Ok(page_body(&[20], 2))), Applied::Fresh);
        assert_eq!(view.apply(t1.seq, Ok(page_body(&[10], 1))), Applied::Stale);

        let snap = view.snapshot();
        assert_eq!(snap.result.status, FetchStatus::Success);
        assert_eq!(snap.result.items[0]["id"], 20);
        assert_eq!(snap.result.pagination.as_ref().unwrap().current_page, 2);
    }

    #[test]
    fn test_stale_error_cannot_clobber_fresh_success() {
        let mut view = view();
        let t1 = view.begin();
        let t2 = view.begin();

        view.apply(t2.seq, Ok(page_body(&[20], 2)));
        assert_eq!(view.apply(t1.seq, Err(ClientError::Unauthorized)), Applied::Stale);
        assert_eq!(view.snapshot().result.status, FetchStatus::Success);
    }

    #[test]
    fn test_controller_survives_failure() {
        let mut view = view();
        let t1 = view.begin();
        view.apply(t1.seq, Err(ClientError::Protocol("boom".to_string())));
        assert_eq!(view.snapshot().result.status, FetchStatus::Error);

        let t2 = view.begin();
        view.apply(t2.seq, Ok(page_body(&[1], 1)));
        assert_eq!(view.snapshot().result.status, FetchStatus::Success);
        assert_eq!(view.snapshot().result.items.len(), 1);
    }
}
