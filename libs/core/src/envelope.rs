//! Defensive extraction of the WhatsApp Cloud API webhook envelope.
//!
//! Meta wraps inbound events as `entry[] -> changes[] -> value.messages[]`.
//! Status callbacks and partial payloads arrive on the same route, so every
//! nesting level is optional here; nothing actionable means `None`, never a
//! panic.

use serde_json::Value;

/// One inbound message, reduced to what the relay acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender identifier, used as the reply recipient.
    pub from: String,
    /// Text body; `None` for non-text message types (media, reactions, ...).
    pub text: Option<String>,
}

/// Returns the first message in the envelope that carries a sender id.
/// Missing or mistyped nesting levels are skipped.
pub fn first_message(payload: &Value) -> Option<InboundMessage> {
    let entries = payload.get("entry")?.as_array()?;
    for entry in entries {
        let Some(changes) = entry.get("changes").and_then(|v| v.as_array()) else {
            continue;
        };
        for change in changes {
            let Some(value) = change.get("value") else {
                continue;
            };
            let Some(messages) = value.get("messages").and_then(|v| v.as_array()) else {
                continue;
            };
            for message in messages {
                if let Some(parsed) = message_from_value(message) {
                    return Some(parsed);
                }
            }
        }
    }
    None
}

fn message_from_value(message: &Value) -> Option<InboundMessage> {
    let from = message.get("from")?.as_str()?.to_string();
    let text = message
        .get("text")
        .and_then(|t| t.get("body"))
        .and_then(|b| b.as_str())
        .map(|s| s.to_string());
    Some(InboundMessage { from, text })
}
