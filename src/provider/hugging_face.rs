//! Hosted inference client (Hugging Face Inference API style).

use std::sync::Arc;

use tracing::{debug, warn};

use super::http::{bearer_headers, status_to_error};
use super::{InferenceTransport, ReqwestTransport};
use crate::config::Credential;
use crate::error::{MindcheckError, Result};
use crate::types::{InferenceRequest, InferenceResponse};

/// Default endpoint template.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/{model_id}";

const MODEL_ID_PLACEHOLDER: &str = "{model_id}";

/// Endpoint URL with a `{model_id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate(String);

impl EndpointTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        if !template.contains(MODEL_ID_PLACEHOLDER) {
            return Err(MindcheckError::Configuration(format!(
                "endpoint template '{template}' has no {MODEL_ID_PLACEHOLDER} placeholder"
            )));
        }
        Ok(Self(template.to_string()))
    }

    /// Substitute the model identifier into the template.
    pub fn url_for(&self, model_id: &str) -> String {
        self.0.replace(MODEL_ID_PLACEHOLDER, model_id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EndpointTemplate {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

/// Sends prompts to the inference endpoint, one request per call.
#[derive(Clone)]
pub struct InferenceClient {
    credential: Credential,
    endpoint: EndpointTemplate,
    transport: Arc<dyn InferenceTransport>,
}

impl std::fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceClient")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .field("transport", &"..")
            .finish()
    }
}

impl InferenceClient {
    /// Client for the default endpoint over reqwest.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            endpoint: EndpointTemplate::default(),
            transport: Arc::new(ReqwestTransport::default()),
        }
    }

    pub fn with_endpoint(mut self, endpoint: EndpointTemplate) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn InferenceTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn endpoint(&self) -> &EndpointTemplate {
        &self.endpoint
    }

    /// Post `prompt` to the model named `model_id` and decode the reply.
    ///
    /// Any status other than 200 is returned as [`MindcheckError::Api`] with
    /// the raw body. No retries.
    pub async fn infer(&self, model_id: &str, prompt: &str) -> Result<InferenceResponse> {
        let url = self.endpoint.url_for(model_id);
        let headers = bearer_headers(&self.credential)?;
        let body = serde_json::to_value(InferenceRequest::new(prompt))?;

        debug!(model = model_id, prompt_len = prompt.len(), "inference request");

        let resp = self.transport.post_json(&url, headers, &body).await?;
        if resp.status != 200 {
            warn!(model = model_id, status = resp.status, "inference endpoint returned an error");
            return Err(status_to_error(resp.status, &resp.body));
        }

        let value: serde_json::Value = serde_json::from_str(&resp.body)?;
        Ok(InferenceResponse::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TransportResponse;
    use async_trait::async_trait;
    use reqwest::header::HeaderMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(String, HeaderMap, serde_json::Value)>>,
        reply: Mutex<Option<TransportResponse>>,
    }

    #[async_trait]
    impl InferenceTransport for Recorder {
        async fn post_json(
            &self,
            url: &str,
            headers: HeaderMap,
            body: &serde_json::Value,
        ) -> Result<TransportResponse> {
            self.seen
                .lock()
                .unwrap()
                .push((url.to_string(), headers, body.clone()));
            Ok(self
                .reply
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| TransportResponse::new(200, "[]")))
        }
    }

    #[test]
    fn template_requires_placeholder() {
        assert!(EndpointTemplate::parse("http://x/models/{model_id}").is_ok());
        assert!(EndpointTemplate::parse("http://x/models/").is_err());
    }

    #[test]
    fn template_substitutes_identifier_verbatim() {
        let template = EndpointTemplate::parse("http://x/models/{model_id}").unwrap();
        assert_eq!(
            template.url_for("tiiuae/falcon-7b-instruct"),
            "http://x/models/tiiuae/falcon-7b-instruct"
        );
    }

    #[tokio::test]
    async fn infer_posts_inputs_with_bearer_token() {
        let recorder = Arc::new(Recorder::default());
        let client = InferenceClient::new(Credential::new("hf_abc"))
            .with_transport(recorder.clone());

        let resp = client.infer("google/gemma-1.1-2b-it", "hello").await.unwrap();
        assert_eq!(resp, InferenceResponse::Sequence(vec![]));

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (url, headers, body) = &seen[0];
        assert_eq!(
            url,
            "https://api-inference.huggingface.co/models/google/gemma-1.1-2b-it"
        );
        assert_eq!(headers["authorization"], "Bearer hf_abc");
        assert_eq!(body, &serde_json::json!({"inputs": "hello"}));
    }

    #[tokio::test]
    async fn non_200_status_is_an_api_error() {
        let recorder = Arc::new(Recorder::default());
        *recorder.reply.lock().unwrap() = Some(TransportResponse::new(201, "{}"));
        let client = InferenceClient::new(Credential::new("k")).with_transport(recorder);

        let err = client.infer("m", "p").await.unwrap_err();
        assert!(matches!(err, MindcheckError::Api { status: 201, .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_serialization_error() {
        let recorder = Arc::new(Recorder::default());
        *recorder.reply.lock().unwrap() = Some(TransportResponse::new(200, "<html>"));
        let client = InferenceClient::new(Credential::new("k")).with_transport(recorder);

        let err = client.infer("m", "p").await.unwrap_err();
        assert!(matches!(err, MindcheckError::Serialization(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn debug_does_not_leak_credential() {
        let client = InferenceClient::new(Credential::new("hf_hidden"));
        assert!(!format!("{client:?}").contains("hf_hidden"));
    }
}
