//! Shared test helpers and stub transport.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use mindcheck::config::Credential;
use mindcheck::error::{MindcheckError, Result};
use mindcheck::evaluation::Evaluator;
use mindcheck::provider::{InferenceClient, InferenceTransport, TransportResponse};

/// One recorded outbound call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

enum Reply {
    Status(u16, String),
    Timeout,
}

/// A transport that returns a canned reply and records every call.
pub struct StubTransport {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(status, body.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Timeout,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceTransport for StubTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &serde_json::Value,
    ) -> Result<TransportResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            authorization: headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: body.clone(),
        });
        match &self.reply {
            Reply::Status(status, body) => Ok(TransportResponse::new(*status, body.clone())),
            Reply::Timeout => Err(MindcheckError::Timeout("operation timed out".into())),
        }
    }
}

pub fn evaluator_with(transport: Arc<StubTransport>) -> Evaluator {
    let client = InferenceClient::new(Credential::new("hf_test")).with_transport(transport);
    Evaluator::new(client)
}
