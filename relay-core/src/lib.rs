//! # relay-core
//!
//! Core types and traits for the relay: [`Bot`], [`Handler`], inbound message types,
//! the error model, secrets loading and tracing initialization. Transport-agnostic;
//! used by relay-telegram, chat-pipeline and relay-bot.

pub mod bot;
pub mod config;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use config::{mask_token, Secrets};
pub use error::{ConfigError, GenerationError, RelayError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
