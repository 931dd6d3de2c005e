//! The relay's only handler: ask the ChatBot, send its answer back on the same chat.

use std::sync::Arc;

use async_trait::async_trait;
use chat_pipeline::ChatBot;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

/// Answers every message with [`ChatBot::respond`]. Failures propagate to the transport; no error text is sent.
pub struct ReplyHandler {
    chatbot: ChatBot,
    bot: Arc<dyn Bot>,
}

impl ReplyHandler {
    pub fn new(chatbot: ChatBot, bot: Arc<dyn Bot>) -> Self {
        Self { chatbot, bot }
    }
}

#[async_trait]
impl Handler for ReplyHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = self.chatbot.respond(&message.content).await?;
        self.bot.reply_to(message, &reply).await?;
        info!(reply_len = reply.len(), "step: reply sent");
        Ok(HandlerResponse::Reply(reply))
    }
}
