//! # chat-pipeline
//!
//! The relay's message-processing core: a fresh [`ConversationState`] per inbound message,
//! threaded through `START → AnalyzeQuery → GenerateResponse → END` by a [`Pipeline`],
//! and a [`ChatBot`] that turns the final state into reply text.

mod chatbot;
mod graph;
mod stage;
mod state;

pub use chatbot::ChatBot;
pub use graph::Pipeline;
pub use stage::{AnalyzeQuery, GenerateResponse, Stage};
pub use state::ConversationState;
