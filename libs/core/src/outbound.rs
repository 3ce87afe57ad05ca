use serde_json::{Value, json};

/// A reply addressed back through the Cloud API, tagged by message type.
/// Built per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundReply {
    Text { body: String },
    Image { link: String },
}

impl OutboundReply {
    /// Builds the `/{phone_number_id}/messages` request body addressed to
    /// `to`. Images go by URL reference, not binary upload.
    pub fn to_payload(&self, to: &str) -> Value {
        match self {
            OutboundReply::Text { body } => json!({
                "messaging_product": "whatsapp",
                "to": to,
                "type": "text",
                "text": { "body": body },
            }),
            OutboundReply::Image { link } => json!({
                "messaging_product": "whatsapp",
                "to": to,
                "type": "image",
                "image": { "link": link },
            }),
        }
    }
}
