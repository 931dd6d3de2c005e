//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Records every `send_message(chat, text)` so tests can assert on the exact reply
//! without hitting Telegram.

use async_trait::async_trait;
use relay_core::{Bot, Chat, Result};
use std::sync::Mutex;

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRecord {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SendRecord>>,
}

impl MockBot {
    pub fn sent(&self) -> Vec<SendRecord> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SendRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}
