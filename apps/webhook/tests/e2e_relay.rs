#![cfg(feature = "e2e")]

//! Sends one real text message through the Graph API. Run with
//! `cargo test -p relay-webhook --features e2e -- --ignored` and
//! `WHATSAPP_TOKEN` / `PHONE_NUMBER_ID` / `WHATSAPP_RECIPIENT` set.

use relay_webhook::whatsapp::{MessageSender, WhatsAppSender};

#[test]
#[ignore]
fn whatsapp_send_text_e2e() {
    dotenvy::dotenv().ok();

    let token = match std::env::var("WHATSAPP_TOKEN") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            eprintln!("skipping whatsapp e2e: WHATSAPP_TOKEN missing");
            return;
        }
    };

    let phone_id = match std::env::var("PHONE_NUMBER_ID") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            eprintln!("skipping whatsapp e2e: PHONE_NUMBER_ID missing");
            return;
        }
    };

    let recipient = match std::env::var("WHATSAPP_RECIPIENT") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            eprintln!("skipping whatsapp e2e: WHATSAPP_RECIPIENT missing");
            return;
        }
    };

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let sender = WhatsAppSender::new(
        reqwest::Client::new(),
        "https://graph.facebook.com",
        phone_id,
        token,
    );

    match runtime.block_on(sender.send_text(&recipient, "relay e2e check")) {
        Ok(()) => println!("whatsapp e2e message sent to {recipient}"),
        Err(err) => {
            let detail = err.to_string();
            if detail.contains("request failed") {
                eprintln!("skipping whatsapp e2e: network unavailable ({detail})");
            } else {
                panic!("whatsapp e2e send failed: {detail}");
            }
        }
    }
}
