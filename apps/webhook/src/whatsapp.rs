//! Outbound WhatsApp Cloud API client. One `POST /{phone_number_id}/messages`
//! per reply, bearer-authenticated; non-success statuses surface as
//! [`RelayError::Delivery`].

use async_trait::async_trait;
use relay_core::{OutboundReply, RelayError, RelayResult};
use reqwest::Client;

const API_VERSION: &str = "v19.0";

/// Outbound messaging seam mirrored by the test fakes.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, to: &str, body: &str) -> RelayResult<()>;
    async fn send_image(&self, to: &str, link: &str) -> RelayResult<()>;
}

#[derive(Clone)]
pub struct WhatsAppSender {
    http: Client,
    api_base: String,
    phone_number_id: String,
    token: String,
}

impl WhatsAppSender {
    pub fn new(
        http: Client,
        api_base: impl Into<String>,
        phone_number_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            phone_number_id: phone_number_id.into(),
            token: token.into(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{API_VERSION}/{}/messages",
            self.api_base.trim_end_matches('/'),
            self.phone_number_id
        )
    }

    async fn post(&self, to: &str, reply: &OutboundReply) -> RelayResult<()> {
        let response = self
            .http
            .post(self.messages_url())
            .bearer_auth(&self.token)
            .json(&reply.to_payload(to))
            .send()
            .await
            .map_err(|err| RelayError::Delivery(format!("whatsapp request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Delivery(format!("whatsapp returned {status}: {body}")));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageSender for WhatsAppSender {
    async fn send_text(&self, to: &str, body: &str) -> RelayResult<()> {
        let reply = OutboundReply::Text {
            body: body.to_string(),
        };
        self.post(to, &reply).await
    }

    async fn send_image(&self, to: &str, link: &str) -> RelayResult<()> {
        let reply = OutboundReply::Image {
            link: link.to_string(),
        };
        self.post(to, &reply).await
    }
}
