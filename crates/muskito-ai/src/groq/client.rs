//! Groq client struct, request building, and response parsing.

use crate::session::SessionError;
use crate::{AiError, CompletionRequest};

use super::config::GroqConfig;

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    /// Build a client. Only a connect timeout is set; a reply may stream
    /// for as long as the service keeps sending.
    pub fn new(config: GroqConfig) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| SessionError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Build the JSON request body for the chat-completions endpoint.
    pub(crate) fn build_request_body(
        &self,
        request: &CompletionRequest,
        stream: bool,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": stream,
        })
    }

    /// Parse a non-streaming response. A null or missing `content` is `None`.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Option<String>, AiError> {
        let choice = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| AiError::Parse("no choices in response".to_string()))?;

        Ok(choice["message"]["content"].as_str().map(String::from))
    }

    /// Extract the text delta from one streamed chunk. Empty deltas are `None`.
    pub(crate) fn parse_stream_chunk(data: &str) -> Result<Option<String>, AiError> {
        let json: serde_json::Value =
            serde_json::from_str(data).map_err(|e| AiError::Parse(e.to_string()))?;

        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AiError::Api(message.to_string()));
        }

        Ok(json["choices"][0]["delta"]["content"]
            .as_str()
            .filter(|t| !t.is_empty())
            .map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    fn client() -> GroqClient {
        GroqClient::new(GroqConfig::new("gsk_test")).unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "llama-3.1-8b-instant".into(),
            messages: vec![Message::system("be nice"), Message::user("hi")],
            temperature: 0.9,
            max_tokens: 512,
        }
    }

    #[test]
    fn request_body_carries_all_parameters() {
        let body = client().build_request_body(&request(), true);
        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["temperature"], 0.9);
        assert_eq!(body["max_tokens"], 512);
        assert_eq!(body["stream"], true);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be nice");
        assert_eq!(body["messages"][1]["role"], "user");

        let body = client().build_request_body(&request(), false);
        assert_eq!(body["stream"], false);
        assert_eq!(body["max_tokens"], 512);
    }

    #[test]
    fn parse_response_text() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "OK" } }]
        });
        assert_eq!(client().parse_response(json).unwrap(), Some("OK".into()));
    }

    #[test]
    fn parse_response_null_content() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        });
        assert_eq!(client().parse_response(json).unwrap(), None);
    }

    #[test]
    fn parse_response_without_choices_fails() {
        let err = client()
            .parse_response(serde_json::json!({ "choices": [] }))
            .unwrap_err();
        assert!(matches!(err, AiError::Parse(_)));
    }

    #[test]
    fn parse_stream_chunk_variants() {
        let chunk = r#"{"choices":[{"delta":{"content":"AB"}}]}"#;
        assert_eq!(GroqClient::parse_stream_chunk(chunk).unwrap(), Some("AB".into()));

        let role_only = r#"{"choices":[{"delta":{"role":"assistant"}}]}"#;
        assert_eq!(GroqClient::parse_stream_chunk(role_only).unwrap(), None);

        let empty = r#"{"choices":[{"delta":{"content":""},"finish_reason":"stop"}]}"#;
        assert_eq!(GroqClient::parse_stream_chunk(empty).unwrap(), None);

        let err = GroqClient::parse_stream_chunk("not json").unwrap_err();
        assert!(matches!(err, AiError::Parse(_)));

        let err = GroqClient::parse_stream_chunk(r#"{"error":{"message":"overloaded"}}"#)
            .unwrap_err();
        assert_eq!(err, AiError::Api("overloaded".into()));
    }
}
