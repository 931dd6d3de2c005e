//! # relay_bot
//!
//! Telegram ↔ LLM relay. Every inbound text message is answered by
//! [`chat_pipeline::ChatBot`] and the reply is sent back to the same chat.
//!
//! Entry points: [`run_relay`] (Telegram long-poll) and [`chat::run_chat_loop`] (local stdin).

mod assembly;
pub mod chat;
pub mod cli;
pub mod handlers;

pub use assembly::{build_chatbot, build_reply_handler, run_relay};
pub use handlers::ReplyHandler;
