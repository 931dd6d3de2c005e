//! Assembly: builds the LLM client, ChatBot and reply handler once, then starts the runner.

use std::sync::Arc;

use anyhow::Result;
use chat_pipeline::ChatBot;
use llm_client::{EnvLlmConfig, LlmClient, LlmConfig, OpenAILlmClient};
use relay_core::{init_tracing, mask_token, Bot, Handler, Secrets};
use relay_telegram::{run_repl, TelegramBotAdapter, TelegramConfig};
use tracing::info;

use crate::handlers::ReplyHandler;

/// ChatBot over an OpenAI-compatible client built from `config`.
pub fn build_chatbot(config: &dyn LlmConfig) -> ChatBot {
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(config));
    ChatBot::new(llm)
}

pub fn build_reply_handler(chatbot: ChatBot, bot: Arc<dyn Bot>) -> Arc<dyn Handler> {
    Arc::new(ReplyHandler::new(chatbot, bot))
}

/// Runs the Telegram relay until the process is stopped.
/// `token_override` replaces `TELEGRAM_BOT_TOKEN` (which is still required to be set).
pub async fn run_relay(secrets: Secrets, token_override: Option<String>) -> Result<()> {
    let token = token_override.unwrap_or_else(|| secrets.telegram_bot_token.clone());
    let telegram = TelegramConfig::from_token(token);
    init_tracing(&telegram.log_file)?;

    let llm_config = EnvLlmConfig::from_api_key(secrets.openai_api_key.clone());
    info!(
        bot_token = %mask_token(&telegram.bot_token),
        openai_api_key = %mask_token(llm_config.api_key()),
        google_api_key = %mask_token(&secrets.google_api_key),
        model = %llm_config.model(),
        base_url = %llm_config.base_url(),
        telegram_api_url = ?telegram.telegram_api_url,
        "Initializing relay"
    );

    let chatbot = build_chatbot(&llm_config);
    info!(stages = ?chatbot.pipeline().stage_names(), "Pipeline built");

    let bot = telegram.build_bot()?;
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let handler = build_reply_handler(chatbot, adapter);

    info!("Starting long polling");
    run_repl(bot, handler).await
}
