//! HTTP transport
//!
//! The `ApiTransport` trait is the seam between the typed API / list
//! controller and the network. `NetworkTransport` is the reqwest-backed
//! implementation; tests substitute their own.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::AuthSession;

/// Error body shape used by the backend (`{"message": ...}` or `{"error": ...}`)
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP transport trait
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}

/// Network transport backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: Client,
    base_url: String,
    session: AuthSession,
}

impl NetworkTransport {
    /// Create a transport from configuration, binding it to an auth session
    pub fn new(config: &ClientConfig, session: AuthSession) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        if let Some(token) = &config.token {
            session.set(token.clone(), None);
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The auth session this transport reads tokens from
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.bearer() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                // Token invalid or expired; the session is the single auth
                // boundary, so it gets cleared right here.
                self.session.clear();
                return Err(ClientError::Unauthorized);
            }
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|b| b.message.or(b.error))
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl ApiTransport for NetworkTransport {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.authorize(request).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.authorize(request).send().await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self
            .client
            .post(self.url(path))
            .json(&serde_json::json!({}));
        let response = self.authorize(request).send().await?;
        self.handle_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.client.patch(self.url(path)).json(body);
        let response = self.authorize(request).send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.delete(self.url(path));
        let response = self.authorize(request).send().await?;
        self.handle_response(response).await
    }
}
