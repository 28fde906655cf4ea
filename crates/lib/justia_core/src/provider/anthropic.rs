//! Anthropic Messages API client.
//!
//! Calls `/v1/messages` once per request, with no retries. Streaming replies
//! are parsed from the SSE body and reduced to text deltas.

use std::future::ready;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, ChatProvider, ProviderConfig, ProviderError, TextStream};

const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct DeltaEvent {
    delta: Delta,
}

#[derive(Deserialize)]
struct Delta {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEvent {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

/// What a single SSE event means for the text stream.
#[derive(Debug, PartialEq)]
enum StreamEvent {
    Text(String),
    Stop,
    Skip,
}

/// Client for the Anthropic Messages API.
pub struct AnthropicProvider {
    client: Client,
    config: ProviderConfig,
}

impl AnthropicProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Streaming requests get no overall deadline; the client's read timeout
    /// still bounds each gap between chunks.
    fn request(&self, system: &str, messages: &[ChatMessage], stream: bool) -> RequestBuilder {
        let builder = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&MessagesRequest {
                model: &self.config.model,
                max_tokens: self.config.max_tokens,
                system,
                messages,
                stream,
            });
        if stream {
            builder
        } else {
            builder.timeout(self.config.timeout)
        }
    }

    async fn send(
        &self,
        system: &str,
        messages: &[ChatMessage],
        stream: bool,
    ) -> Result<Response, ProviderError> {
        debug!(model = %self.config.model, turns = messages.len(), stream, "Calling Anthropic");

        let resp = self
            .request(system, messages, stream)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("Anthropic request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ProviderError::Status { status, body });
        }

        Ok(resp)
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn complete(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        let body = self
            .send(system, messages, false)
            .await?
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read Anthropic body: {e}")))?;
        parse_message_text(&body)
    }

    async fn stream(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<TextStream, ProviderError> {
        let resp = self.send(system, messages, true).await?;
        let events = sse_stream::SseStream::from_bytes_stream(resp.bytes_stream());

        let text = events
            .map(|item| match item {
                Ok(sse) => parse_event(&sse),
                Err(e) => Err(ProviderError::Transport(format!("SSE stream error: {e}"))),
            })
            .take_while(|event| ready(!matches!(event, Ok(StreamEvent::Stop))))
            .filter_map(|event| {
                ready(match event {
                    Ok(StreamEvent::Text(delta)) => Some(Ok(delta)),
                    Ok(_) => None,
                    Err(e) => Some(Err(e)),
                })
            });

        Ok(text.boxed())
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

/// Concatenate the text blocks of a non-streaming response.
fn parse_message_text(body: &str) -> Result<String, ProviderError> {
    let resp: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Decode(format!("Anthropic response parse error: {e}")))?;

    let text: String = resp
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();

    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text)
}

fn parse_event(sse: &sse_stream::Sse) -> Result<StreamEvent, ProviderError> {
    let data = sse.data.as_deref().unwrap_or_default();
    match sse.event.as_deref() {
        Some("content_block_delta") => {
            let event: DeltaEvent = serde_json::from_str(data)
                .map_err(|e| ProviderError::Decode(format!("Bad content_block_delta: {e}")))?;
            match (event.delta.kind.as_str(), event.delta.text) {
                ("text_delta", Some(text)) => Ok(StreamEvent::Text(text)),
                _ => Ok(StreamEvent::Skip),
            }
        }
        Some("message_stop") => Ok(StreamEvent::Stop),
        Some("error") => {
            let event: ErrorEvent = serde_json::from_str(data)
                .map_err(|e| ProviderError::Decode(format!("Bad error event: {e}")))?;
            Err(ProviderError::Api(format!(
                "{}: {}",
                event.error.kind, event.error.message
            )))
        }
        // message_start, content_block_start/stop, message_delta, ping
        _ => Ok(StreamEvent::Skip),
    }
}
