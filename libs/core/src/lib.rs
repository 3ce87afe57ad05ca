//! Shared types for the WhatsApp ⇄ Gemini relay: inbound envelope parsing,
//! command classification, outbound message payloads, and the error type
//! every fallible relay operation returns.

pub mod command;
pub mod envelope;
pub mod error;
pub mod outbound;

pub use command::Command;
pub use envelope::{InboundMessage, first_message};
pub use error::{RelayError, RelayResult};
pub use outbound::OutboundReply;
