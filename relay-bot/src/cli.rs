//! CLI for the relay-bot binary. With no subcommand the Telegram relay starts.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "relay-bot")]
#[command(about = "Relay Telegram text messages to an LLM and send back the reply")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram relay (default).
    Run {
        /// Bot token. If omitted, TELEGRAM_BOT_TOKEN from env is used.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Chat with the pipeline locally (no Telegram). Each line is a fresh, history-free turn.
    Chat {
        /// Optional first message. If omitted, only the interactive loop runs.
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,

        /// Write tracing output (stdout + LOG_FILE).
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Cli {
    /// The subcommand to run; `run` when none was given.
    pub fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Run { token: None })
    }
}
