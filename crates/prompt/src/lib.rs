//! # Prompt
//!
//! Role-tagged chat messages, the unit of LLM prompt/response exchange, and the
//! fixed system instruction the relay puts in front of every user query.
//!
//! ## Format
//!
//! A prompt is an ordered `Vec<ChatMessage>`; order is meaningful and is sent to the
//! model as-is. [`format_transcript`] renders one as `Role: content` lines for logs
//! and the local chat CLI.
//!
//! ## External interactions
//!
//! - **AI models**: messages map one-to-one onto OpenAI Chat Completions `messages`.

use std::fmt;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// API role string (`"system"`, `"user"`, `"assistant"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MessageRole::System => "System",
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// System instruction sent before every user query: answer accurately and politely, in Korean.
pub const SYSTEM_INSTRUCTION: &str = "당신은 전문 AI 어시스턴트입니다.\n사용자의 질문에 대해 정확하고 친절한 한국어 답변을 제공하세요.";

/// Renders messages as `Role: content` lines, in order.
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.label(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}
