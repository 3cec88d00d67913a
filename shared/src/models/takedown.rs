//! Takedown request model
//!
//! A takedown request is a claim that a URL infringes a creator's content.
//! Lifecycle: PENDING -> CONTACTED/APPROVED -> COMPLETED/REJECTED.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Takedown request lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TakedownStatus {
    Pending,
    Contacted,
    Approved,
    Completed,
    Rejected,
}

impl TakedownStatus {
    /// Wire representation, as used in filter query values
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Contacted => "CONTACTED",
            Self::Approved => "APPROVED",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
        }
    }
}

/// Takedown request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakedownRequest {
    pub id: String,
    pub infringing_url: String,
    pub user_profile_id: String,
    /// Search query that surfaced this URL
    pub source_query: String,
    pub status: TakedownStatus,
    /// Contact email scraped from the infringing site, once found
    #[serde(default)]
    pub infringing_site_contact: Option<String>,
    #[serde(default)]
    pub email_sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub google_submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create takedown payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakedownCreate {
    pub infringing_url: String,
    pub user_profile_id: String,
    pub source_query: String,
}

/// Kind of action executed for a takedown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TakedownActionKind {
    Email,
    GoogleForm,
}

/// Action log entry for a takedown request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakedownAction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TakedownActionKind,
    /// Free-form record of what was sent (email fields, form fields, ...)
    pub content: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Mutation outcome carrying the updated request
/// (`POST /api/takedowns`, `POST /api/takedowns/{id}/find-email`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakedownOutcome {
    pub message: String,
    pub request: TakedownRequest,
}

/// Generated DMCA email, as previewed before dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailPreview {
    #[serde(default)]
    pub to: Option<String>,
    pub subject: String,
    pub body: String,
    pub signature: String,
}

/// Outgoing DMCA email, after operator edits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDispatch {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub signature: String,
}

/// Field values for Google's DMCA takedown form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleFormFields {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub contact_email: String,
    pub country: String,
    pub infringing_urls: String,
    pub work_description: String,
    pub authorized_example_urls: String,
    pub infringement_description: String,
    pub signature: String,
}

/// Pre-filled Google form data plus the steps the operator must do by hand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleFormPreview {
    pub form_fields: GoogleFormFields,
    pub manual_steps: Vec<String>,
}
