//! Chat endpoints.

use std::convert::Infallible;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::{self, Stream, StreamExt};
use justia_core::assistant::ChatQuery;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error};

use crate::AppState;
use crate::models::{ChatRequest, ChatResponse, StreamDelta};

/// Terminal marker sent after the last delta.
pub const DONE_MARKER: &str = "[DONE]";

/// `POST /api/chat`: answer in one response.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let started = Instant::now();
    let language = req.language.clone();

    let reply = state.assistant.reply(&ChatQuery::from(req)).await;
    let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(source = reply.source.as_str(), response_time_ms, "Chat reply ready");

    Json(ChatResponse {
        reply: reply.text,
        source: reply.source,
        language,
        response_time_ms,
        disclaimer: true,
    })
}

/// `POST /api/chat/stream`: answer as `data: {"delta": ...}` events,
/// terminated by `data: [DONE]`.
pub async fn chat_stream(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state
        .assistant
        .stream_reply(ChatQuery::from(req), state.config.stream_char_delay);

    let deltas = ReceiverStream::new(rx).filter_map(|delta| async move {
        match Event::default().json_data(StreamDelta { delta }) {
            Ok(event) => Some(event),
            Err(e) => {
                error!(error = %e, "Failed to encode stream delta");
                None
            }
        }
    });
    let events = deltas
        .chain(stream::once(async { Event::default().data(DONE_MARKER) }))
        .map(Ok::<_, Infallible>);

    Sse::new(events).keep_alive(KeepAlive::default())
}
