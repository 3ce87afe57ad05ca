use anyhow::Result;
use relay_webhook::config::RelayConfig;
use relay_webhook::gemini::GeminiClient;
use relay_webhook::webhook::{AppState, router};
use relay_webhook::whatsapp::WhatsAppSender;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RelayConfig::from_env()?;

    let http = reqwest::Client::new();
    let genai = GeminiClient::new(
        http.clone(),
        config.gemini_api_base.clone(),
        config.gemini_api_key.clone(),
    );
    let sender = WhatsAppSender::new(
        http,
        config.wa_api_base.clone(),
        config.phone_number_id.clone(),
        config.whatsapp_token.clone(),
    );

    let state = AppState {
        verify_token: Arc::from(config.verify_token.as_str()),
        genai: Arc::new(genai),
        sender: Arc::new(sender),
    };

    tracing::info!("relay-webhook listening on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}
