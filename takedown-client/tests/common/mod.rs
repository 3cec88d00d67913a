// Shared test double: an ApiTransport that serves canned JSON bodies and
// records every call it sees.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use takedown_client::{ApiTransport, ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<ClientResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    pub fn push_err(&self, err: ClientError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: &str, query: &[(String, String)], body: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            query: query.to_vec(),
            body,
        });
    }

    fn next(&self) -> ClientResult<Value> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Protocol("no canned response left".to_string())))
    }

    fn decode<T: DeserializeOwned>(&self) -> ClientResult<T> {
        let value = self.next()?;
        serde_json::from_value(value).map_err(|e| ClientError::Protocol(e.to_string()))
    }
}

#[async_trait]
impl ApiTransport for RecordingTransport {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T> {
        self.record("GET", path, query, None);
        self.decode()
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.record("POST", path, &[], Some(serde_json::to_value(body).unwrap()));
        self.decode()
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("POST", path, &[], None);
        self.decode()
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.record("PATCH", path, &[], Some(serde_json::to_value(body).unwrap()));
        self.decode()
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("DELETE", path, &[], None);
        self.decode()
    }
}
