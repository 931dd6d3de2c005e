//! Long-poll runner: converts teloxide messages to core::Message and hands them to the handler.

use std::sync::Arc;

use anyhow::Result;
use relay_core::{Handler, HandlerResponse, Message, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Invokes `handler` for a converted text message; `None` (non-text, empty) is dropped silently.
///
/// Handler errors are logged and swallowed: nothing is sent back to the chat on failure.
pub async fn dispatch(handler: Arc<dyn Handler>, message: Option<Message>) -> Option<HandlerResponse> {
    let message = message?;
    info!(
        user_id = message.user.id,
        chat_id = message.chat.id,
        message_id = %message.id,
        "step: handling message"
    );
    match handler.handle(&message).await {
        Ok(response) => {
            let HandlerResponse::Reply(ref reply) = response;
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = reply.len(),
                "step: message handled"
            );
            Some(response)
        }
        Err(e) => {
            error!(error = %e, user_id = message.user.id, chat_id = message.chat.id, "Handler failed");
            None
        }
    }
}

/// Starts the long-poll loop with the given teloxide Bot and handler; runs until the process stops.
/// Calls get_me() first to log the bot username. Each message is handled in its own task.
#[instrument(skip(bot, handler))]
pub async fn run_repl(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Bot connected"),
        Err(e) => error!(error = %e, "get_me failed; starting polling anyway"),
    }

    teloxide::repl(bot, move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
        let handler = handler.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            match &core_msg {
                Some(m) => info!(
                    user_id = m.user.id,
                    chat_id = m.chat.id,
                    message_content = %m.content,
                    "Received message"
                ),
                None => debug!(chat_id = msg.chat.id.0, "Ignored non-text message"),
            }
            if core_msg.is_some() {
                tokio::spawn(dispatch(handler, core_msg));
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
