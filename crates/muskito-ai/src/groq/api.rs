//! CompletionService trait implementation for GroqClient.

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use crate::streaming::response_events;
use crate::{AiError, CompletionRequest, CompletionService, FragmentStream};

use super::client::GroqClient;

/// Payload that marks the end of an OpenAI-style stream.
const DONE_SENTINEL: &str = "[DONE]";

impl GroqClient {
    async fn post(
        &self,
        request: &CompletionRequest,
        stream: bool,
    ) -> Result<reqwest::Response, AiError> {
        let body = self.build_request_body(request, stream);

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            stream,
            "Groq API request"
        );

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::Api(format!("HTTP {status}: {text}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, AiError> {
        let response = self.post(request, false).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;

        self.parse_response(json)
    }

    async fn complete_streaming(
        &self,
        request: &CompletionRequest,
    ) -> Result<FragmentStream, AiError> {
        let response = self.post(request, true).await?;

        let fragments = response_events(response)
            .take_while(|event| {
                let done = matches!(event, Ok(e) if e.data == DONE_SENTINEL);
                std::future::ready(!done)
            })
            .filter_map(|event| {
                let fragment = match event {
                    Ok(event) => GroqClient::parse_stream_chunk(&event.data).transpose(),
                    Err(e) => Some(Err(e)),
                };
                std::future::ready(fragment)
            });

        Ok(Box::pin(fragments))
    }
}
