//! Reply orchestration: AI provider first, offline responder as fallback.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::data::ReferenceData;
use crate::mock;
use crate::prompt;
use crate::provider::{ChatMessage, ChatProvider, TextStream};

/// Prior turns kept when building a provider request.
pub const MAX_HISTORY: usize = 10;

const STREAM_BUFFER: usize = 64;

/// A user question with its request context.
#[derive(Debug, Clone, Default)]
pub struct ChatQuery {
    pub message: String,
    pub language: String,
    pub state: Option<String>,
    pub case_type: Option<String>,
    pub history: Vec<ChatMessage>,
}

/// Which engine produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Claude,
    Mock,
}

impl ReplySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplySource::Claude => "claude",
            ReplySource::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// Shared, read-only reply engine. Cloning is cheap.
#[derive(Clone)]
pub struct Assistant {
    data: Arc<ReferenceData>,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl Assistant {
    pub fn new(data: Arc<ReferenceData>, provider: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { data, provider }
    }

    /// Offline-only engine.
    pub fn offline(data: Arc<ReferenceData>) -> Self {
        Self::new(data, None)
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Whether replies can come from the AI provider.
    pub fn ai_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer `query` in one piece. Provider failures are logged and answered
    /// by the offline responder.
    pub async fn reply(&self, query: &ChatQuery) -> Reply {
        let Some(provider) = &self.provider else {
            return self.mock_reply(query);
        };

        let system = self.system_prompt(query);
        match provider.complete(&system, &conversation(query)).await {
            Ok(text) => Reply {
                text,
                source: ReplySource::Claude,
            },
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Provider call failed, using offline reply");
                self.mock_reply(query)
            }
        }
    }

    /// Answer `query` incrementally. The returned channel closes when the
    /// reply is complete; dropping it stops the producer.
    pub fn stream_reply(&self, query: ChatQuery, char_delay: Duration) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let this = self.clone();
        tokio::spawn(async move { this.produce(query, char_delay, tx).await });
        rx
    }

    async fn produce(&self, query: ChatQuery, char_delay: Duration, tx: mpsc::Sender<String>) {
        if let Some(provider) = &self.provider {
            let system = self.system_prompt(&query);
            match provider.stream(&system, &conversation(&query)).await {
                Ok(deltas) => {
                    if forward(provider.name(), deltas, &tx).await == Forwarded::Some {
                        return;
                    }
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "Provider stream failed, using offline reply");
                }
            }
        }

        let text = self.mock_reply(&query).text;
        for ch in text.chars() {
            if tx.send(ch.to_string()).await.is_err() {
                debug!("Stream receiver dropped");
                return;
            }
            if !char_delay.is_zero() {
                tokio::time::sleep(char_delay).await;
            }
        }
    }

    fn system_prompt(&self, query: &ChatQuery) -> String {
        let context = prompt::build_context(
            &self.data,
            query.state.as_deref(),
            query.case_type.as_deref(),
            &query.language,
        );
        prompt::system_prompt(&context)
    }

    fn mock_reply(&self, query: &ChatQuery) -> Reply {
        Reply {
            text: mock::generate(
                &self.data,
                &query.message,
                &query.language,
                query.state.as_deref(),
            ),
            source: ReplySource::Mock,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Forwarded {
    /// Nothing reached the client; the caller may still fall back.
    Nothing,
    Some,
}

async fn forward(provider: &str, mut deltas: TextStream, tx: &mpsc::Sender<String>) -> Forwarded {
    let mut sent = Forwarded::Nothing;
    while let Some(item) = deltas.next().await {
        match item {
            Ok(delta) => {
                if tx.send(delta).await.is_err() {
                    debug!("Stream receiver dropped");
                    return Forwarded::Some;
                }
                sent = Forwarded::Some;
            }
            Err(e) if sent == Forwarded::Nothing => {
                warn!(provider, error = %e, "Provider stream failed before first delta, using offline reply");
                return Forwarded::Nothing;
            }
            Err(e) => {
                warn!(provider, error = %e, "Provider stream failed mid-reply");
                return Forwarded::Some;
            }
        }
    }
    sent
}

/// The last [`MAX_HISTORY`] turns followed by the new user message.
fn conversation(query: &ChatQuery) -> Vec<ChatMessage> {
    let skip = query.history.len().saturating_sub(MAX_HISTORY);
    query
        .history
        .iter()
        .skip(skip)
        .cloned()
        .chain(std::iter::once(ChatMessage::user(query.message.clone())))
        .collect()
}
