//! Model invocation client
//!
//! Posts a prompt plus a response JSON schema to the hosted model
//! endpoint and parses the structured reply. The endpoint is an opaque
//! capability: one shot, client-side timeout, no retry. Any failure —
//! network, non-success status, or a payload that does not match the
//! schema — is a `ModelInvocation` error; the caller turns it into the
//! transcript apology.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use sm_common::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Total request timeout; model calls are slower than plain reads
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Structured reply requested from the model
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationReply {
    /// Conversational response text
    pub response: String,
    /// Referenced record identifiers, most relevant first
    #[serde(default)]
    pub artist_ids: Vec<String>,
}

/// Client for the hosted language-model invocation endpoint
pub struct LlmClient {
    http_client: Client,
    invoke_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    /// Create a client against the given invoke URL with an optional
    /// bearer key
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be built (should not happen with
    /// valid defaults).
    pub fn new(invoke_url: impl Into<String>, api_key: Option<String>) -> Self {
        LlmClient {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            invoke_url: invoke_url.into(),
            api_key,
        }
    }

    /// Invoke the model with a prompt, requesting the recommendation
    /// reply shape
    ///
    /// # Errors
    /// Returns `ModelInvocation` if the request fails, the endpoint
    /// responds with a non-success status, or the payload does not parse
    /// as a `RecommendationReply`. The response is accepted wholesale or
    /// treated as a full failure; there is no partial-success handling.
    pub async fn invoke(&self, prompt: &str) -> Result<RecommendationReply> {
        debug!(prompt_len = prompt.len(), "Invoking model endpoint");

        let body = json!({
            "prompt": prompt,
            "response_json_schema": {
                "type": "object",
                "properties": {
                    "response": { "type": "string" },
                    "artist_ids": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                }
            }
        });

        let mut request = self.http_client.post(&self.invoke_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::ModelInvocation(format!("Model request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ModelInvocation(format!(
                "Model endpoint returned error {}: {}",
                status, body
            )));
        }

        let reply: RecommendationReply = response.json().await.map_err(|e| {
            Error::ModelInvocation(format!("Malformed model response: {}", e))
        })?;

        debug!(
            referenced = reply.artist_ids.len(),
            "Model invocation complete"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_parses_without_artist_ids() {
        let reply: RecommendationReply =
            serde_json::from_str(r#"{"response":"Sure"}"#).expect("parses");
        assert_eq!(reply.response, "Sure");
        assert!(reply.artist_ids.is_empty());
    }

    #[test]
    fn test_reply_missing_response_is_malformed() {
        let result: std::result::Result<RecommendationReply, _> =
            serde_json::from_str(r#"{"artist_ids":["a1"]}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_model_invocation_error() {
        let client = LlmClient::new("http://127.0.0.1:9/invoke", None);
        let result = client.invoke("hello").await;
        assert!(matches!(result, Err(Error::ModelInvocation(_))));
    }
}
