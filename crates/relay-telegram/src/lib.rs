//! # relay-telegram
//!
//! Telegram transport layer: adapters to core types, [`relay_core::Bot`] implementation,
//! minimal config, and the long-poll runner that hands every inbound text message to one
//! [`relay_core::Handler`]. No LLM logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{dispatch, run_repl};
