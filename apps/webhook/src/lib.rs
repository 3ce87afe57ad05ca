//! WhatsApp webhook relay service.
//!
//! ```text
//! Meta calls `GET/POST /webhook`; inbound text is classified (`"img "`
//! prefix → image prompt, otherwise chat), generated through Gemini, and the
//! result is sent back to the sender via the Cloud API.
//! ```

pub mod config;
pub mod gemini;
pub mod webhook;
pub mod whatsapp;
