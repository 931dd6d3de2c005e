//! Per-request conversation state.

use prompt::ChatMessage;

/// The record threaded through the pipeline: the user's query and the prompt built so far.
///
/// `user_query` is fixed at construction; stages only replace `messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    user_query: String,
    messages: Vec<ChatMessage>,
}

impl ConversationState {
    /// Initial state for one inbound message: query set, no messages.
    pub fn new(user_query: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            messages: Vec::new(),
        }
    }

    pub fn user_query(&self) -> &str {
        &self.user_query
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the same query with `messages` as the whole message list.
    pub fn with_messages(self, messages: Vec<ChatMessage>) -> Self {
        Self {
            user_query: self.user_query,
            messages,
        }
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }
}
