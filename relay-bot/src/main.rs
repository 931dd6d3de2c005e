//! relay-bot: entry point. Loads secrets (fail fast), then runs the Telegram relay or the local chat loop.

use std::io;

use anyhow::Result;
use clap::Parser;
use llm_client::EnvLlmConfig;
use relay_bot::chat::run_chat_loop;
use relay_bot::cli::{Cli, Commands};
use relay_bot::{build_chatbot, run_relay};
use relay_core::{init_tracing, Secrets};
use relay_telegram::TelegramConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let secrets = Secrets::from_env()?;

    match cli.command_or_default() {
        Commands::Run { token } => run_relay(secrets, token).await,
        Commands::Chat { message, verbose } => {
            if verbose {
                let telegram = TelegramConfig::from_token(secrets.telegram_bot_token.clone());
                init_tracing(&telegram.log_file)?;
            }
            let chatbot = build_chatbot(&EnvLlmConfig::from_api_key(secrets.openai_api_key));
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_chat_loop(&chatbot, message, stdin.lock(), &mut stdout).await
        }
    }
}
