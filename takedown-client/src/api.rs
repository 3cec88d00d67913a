//! Typed endpoint API
//!
//! `DashboardApi` wraps a transport with one method per backend operation.
//! List pages get their fetch state from `ListView` controllers built by
//! `history_view` / `profiles_view`; everything else is a one-shot call.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{ApiTransport, NetworkTransport};
use crate::list::ListView;
use crate::session::AuthSession;

use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::models::{
    CreatorProfile, EmailDispatch, EmailPreview, GoogleFormFields, GoogleFormPreview,
    ProfileCreate, ProfileUpdate, SearchBody, SearchHit, TakedownAction, TakedownCreate,
    TakedownOutcome, TakedownRequest,
};
use shared::response::{CollectionBody, ItemBody, MessageBody, PendingBody};

/// Client for the takedown backend API
#[derive(Debug)]
pub struct DashboardApi<C = NetworkTransport> {
    transport: Arc<C>,
    session: AuthSession,
}

impl<C> Clone for DashboardApi<C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
        }
    }
}

impl DashboardApi<NetworkTransport> {
    /// Create an API client over the network transport
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let session = AuthSession::new();
        let transport = NetworkTransport::new(config, session.clone())?;
        Ok(Self {
            transport: Arc::new(transport),
            session,
        })
    }
}

impl<C: ApiTransport> DashboardApi<C> {
    /// Create an API client over an arbitrary transport
    pub fn with_transport(transport: Arc<C>, session: AuthSession) -> Self {
        Self { transport, session }
    }

    /// The auth session this client reads and writes
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Shared transport handle, for building additional controllers
    pub fn transport(&self) -> Arc<C> {
        self.transport.clone()
    }

    // ========== Auth ==========

    /// Log in and install the returned token in the session
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.transport.post("/api/auth/login", &request).await?;
        self.session.set(response.token, Some(response.user.clone()));
        tracing::info!(username = %response.user.username, "logged in");
        Ok(response.user)
    }

    /// Drop the session. Client-side only; the backend keeps no session state.
    pub fn logout(&self) {
        self.session.clear();
    }

    // ========== Search ==========

    /// Run a content search for infringing URLs
    pub async fn search(&self, query: &str) -> ClientResult<Vec<SearchHit>> {
        let params = [("q".to_string(), query.to_string())];
        let body: SearchBody = self.transport.get("/api/search", &params).await?;
        Ok(body.results)
    }

    // ========== Takedowns ==========

    /// All takedown requests awaiting review
    pub async fn pending_takedowns(&self) -> ClientResult<PendingBody> {
        self.transport.get("/api/takedowns/pending", &[]).await
    }

    /// Submit a new takedown request for a search result
    pub async fn submit_takedown(&self, create: &TakedownCreate) -> ClientResult<TakedownOutcome> {
        self.transport.post("/api/takedowns", create).await
    }

    /// Mark a pending request as approved
    pub async fn approve_takedown(&self, id: &str) -> ClientResult<MessageBody> {
        self.transport
            .patch(&format!("/api/takedowns/{}/approve", id), &serde_json::json!({}))
            .await
    }

    /// Mark a pending request as rejected
    pub async fn reject_takedown(&self, id: &str) -> ClientResult<MessageBody> {
        self.transport
            .patch(&format!("/api/takedowns/{}/reject", id), &serde_json::json!({}))
            .await
    }

    /// Generated DMCA claim email for an approved request
    pub async fn preview_email(&self, id: &str) -> ClientResult<EmailPreview> {
        let body: ItemBody<EmailPreview> = self
            .transport
            .get(&format!("/api/takedowns/{}/preview-email", id), &[])
            .await?;
        Ok(body.data)
    }

    /// Ask the backend to scrape a contact email from the infringing site
    pub async fn find_contact_email(&self, id: &str) -> ClientResult<TakedownOutcome> {
        self.transport
            .post_empty(&format!("/api/takedowns/{}/find-email", id))
            .await
    }

    /// Dispatch the (possibly operator-edited) claim email
    pub async fn send_email(&self, id: &str, email: &EmailDispatch) -> ClientResult<MessageBody> {
        self.transport
            .post(&format!("/api/takedowns/{}/send-email", id), email)
            .await
    }

    /// Pre-filled field values for Google's DMCA form
    pub async fn preview_google_form(&self, id: &str) -> ClientResult<GoogleFormPreview> {
        let body: ItemBody<GoogleFormPreview> = self
            .transport
            .get(&format!("/api/takedowns/{}/preview-google-form", id), &[])
            .await?;
        Ok(body.data)
    }

    /// Record that the Google form was submitted with the given fields
    pub async fn submit_google_form(
        &self,
        id: &str,
        fields: &GoogleFormFields,
    ) -> ClientResult<MessageBody> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SubmitGoogleForm<'a> {
            form_fields: &'a GoogleFormFields,
        }

        self.transport
            .post(
                &format!("/api/takedowns/{}/submit-google-form", id),
                &SubmitGoogleForm { form_fields: fields },
            )
            .await
    }

    /// Action log for a takedown request
    pub async fn takedown_actions(&self, id: &str) -> ClientResult<Vec<TakedownAction>> {
        let body: CollectionBody<TakedownAction> = self
            .transport
            .get(&format!("/api/takedowns/{}/actions", id), &[])
            .await?;
        Ok(body.data)
    }

    // ========== Profiles ==========

    /// Full profile listing, used for id -> creator name lookups
    pub async fn profiles(&self) -> ClientResult<Vec<CreatorProfile>> {
        let body: CollectionBody<CreatorProfile> =
            self.transport.get("/api/profiles", &[]).await?;
        Ok(body.data)
    }

    /// Create a creator profile
    pub async fn create_profile(&self, create: &ProfileCreate) -> ClientResult<CreatorProfile> {
        let body: ItemBody<CreatorProfile> =
            self.transport.post("/api/profiles", create).await?;
        Ok(body.data)
    }

    /// Update a creator profile
    pub async fn update_profile(
        &self,
        id: &str,
        update: &ProfileUpdate,
    ) -> ClientResult<CreatorProfile> {
        let body: ItemBody<CreatorProfile> = self
            .transport
            .patch(&format!("/api/profiles/{}", id), update)
            .await?;
        Ok(body.data)
    }

    /// Delete a creator profile
    pub async fn delete_profile(&self, id: &str) -> ClientResult<MessageBody> {
        self.transport
            .delete(&format!("/api/profiles/{}", id))
            .await
    }

    // ========== List controllers ==========

    /// Controller for the processed-claims history page
    pub fn history_view(&self, page_size: u32) -> ListView<TakedownRequest, C> {
        ListView::new(self.transport.clone(), "/api/takedowns/history", page_size)
    }

    /// Controller for the paginated profiles page
    pub fn profiles_view(&self, page_size: u32) -> ListView<CreatorProfile, C> {
        ListView::new(self.transport.clone(), "/api/profiles", page_size)
    }
}
