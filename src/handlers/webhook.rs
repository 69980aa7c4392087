use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::strip_channel_prefix;
use crate::errors::AppError;
use crate::services::conversation;
use crate::services::notifier::send_reply;
use crate::services::replies;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct WebhookForm {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

/// Sender and text of an inbound message, both trimmed and non-empty.
#[derive(Debug, PartialEq)]
pub struct Inbound {
    pub sender: String,
    pub text: String,
}

pub async fn whatsapp_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let Some(Inbound { sender, text }) = extract_inbound(&headers, &body) else {
        tracing::warn!(bytes = body.len(), "no valid message or sender in webhook payload");
        return Ok(Json(json!({"status": "ok", "message": "no message to process"})).into_response());
    };

    tracing::info!(sender = %sender, body = %text, "incoming WhatsApp message");

    match conversation::process_message(&state, &sender, &text).await {
        Ok(reply) => {
            let delivery = send_reply(&state, &sender, &reply).await;
            if !delivery.is_sent() {
                tracing::debug!(sender = %sender, ?delivery, "reply not delivered");
            }
            Ok(Json(json!({"status": "success"})).into_response())
        }
        Err(e) => {
            tracing::error!(error = ?e, sender = %sender, "conversation processing failed");
            let delivery = send_reply(&state, &sender, replies::INTERNAL_ERROR).await;
            tracing::debug!(sender = %sender, ?delivery, "apology send attempted");
            Err(AppError::Internal(e.to_string()))
        }
    }
}

pub fn extract_inbound(headers: &HeaderMap, body: &[u8]) -> Option<Inbound> {
    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    let (sender, text) = if is_form {
        let form: WebhookForm = serde_urlencoded::from_bytes(body).ok()?;
        (Some(form.from), Some(form.body))
    } else {
        let data: Value = serde_json::from_slice(body).ok()?;
        extract_from_json(&data)
    };

    let sender = strip_channel_prefix(&sender?);
    let text = text?.trim().to_string();
    if sender.is_empty() || text.is_empty() {
        return None;
    }
    Some(Inbound { sender, text })
}

/// Understands the nested `payload.message.text` / `payload.contact.phone` style used by
/// several WhatsApp gateways, falling back to top-level `text`/`message` and `from`/`sender`.
fn extract_from_json(data: &Value) -> (Option<String>, Option<String>) {
    let mut sender = None;
    let mut text = None;

    if let Some(payload) = data.get("payload").filter(|p| p.is_object()) {
        let msg = payload
            .get("message")
            .filter(|m| m.is_object())
            .or_else(|| payload.get("payload").filter(|m| m.is_object()));
        if let Some(msg) = msg {
            text = first_string(msg, &["text", "body"]);
        }

        let contact = payload
            .get("contact")
            .filter(|c| c.is_object())
            .or_else(|| payload.get("sender").filter(|c| c.is_object()));
        if let Some(contact) = contact {
            sender = first_string(contact, &["id", "phone", "number"]);
        }
    }

    let text = text.or_else(|| first_string(data, &["text", "message"]));
    let sender = sender.or_else(|| first_string(data, &["from", "sender"]));
    (sender, text)
}

fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
