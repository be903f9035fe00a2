//! Axum route handler for the chat endpoint

use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};

use crate::error::LlmError;
use crate::state::LlmState;
use crate::types::ChatMessage;

/// Build the chat router
pub fn chat_router(state: LlmState) -> Router {
    Router::new().route("/api/chat", routing::post(chat)).with_state(state)
}

/// Handle `POST /api/chat`
///
/// Success is a 200 whose body is the raw normalized text, appended
/// fragment by fragment until the upstream completes. The content type
/// mirrors what streaming consumers already expect, but the payload is
/// plain text, not SSE-framed.
async fn chat(
    State(state): State<LlmState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return error_response(&LlmError::InvalidRequest("request body must be JSON".to_owned()));
    };

    let (model, messages) = match parse_request(&body) {
        Ok(parsed) => parsed,
        Err(e) => return error_response(&e),
    };

    match state.stream_chat(model, &messages).await {
        Ok(stream) => (
            [
                (header::CONTENT_TYPE, "text/event-stream"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            Body::from_stream(stream),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Validate the inbound body shape and pull out model and messages
///
/// `messages` must be present and an array before anything is sent
/// upstream; `model` is optional and may be any string.
fn parse_request(body: &serde_json::Value) -> Result<(Option<String>, Vec<ChatMessage>), LlmError> {
    let messages = body
        .get("messages")
        .filter(|v| v.is_array())
        .ok_or_else(|| LlmError::InvalidRequest("messages are required and must be an array".to_owned()))?;

    let messages: Vec<ChatMessage> = serde_json::from_value(messages.clone())
        .map_err(|e| LlmError::InvalidRequest(format!("malformed messages: {e}")))?;

    let model = body.get("model").and_then(|v| v.as_str()).map(str::to_owned);

    Ok((model, messages))
}

/// Convert a chat error to a JSON error response
fn error_response(error: &LlmError) -> Response {
    let status = error.status_code();
    let body = match error {
        LlmError::Upstream { body, .. } => serde_json::json!({
            "error": error.client_message(),
            "details": body,
        }),
        other => serde_json::json!({ "error": other.client_message() }),
    };

    (status, Json(body)).into_response()
}
