//! Local chat loop: drives the same [`ChatBot`] as the Telegram relay from line-based input.
//!
//! Used by the `chat` subcommand: optional first message, then lines until EOF or /exit.

use std::io::{BufRead, Write};

use anyhow::Result;
use chat_pipeline::ChatBot;

/// Writes the help text for interactive chat commands.
pub fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out, "  /help    - Show this help message")?;
    writeln!(out, "  /exit    - Exit the chat")?;
    writeln!(out, "  /quit    - Exit the chat")?;
    writeln!(out, "  Any other text will be sent to the model.")?;
    Ok(())
}

/// Runs one turn: prints the reply, or `Error: ...` and keeps going.
pub async fn run_one_turn<W: Write>(chatbot: &ChatBot, content: &str, out: &mut W) -> Result<()> {
    match chatbot.respond(content).await {
        Ok(reply) => writeln!(out, "{}", reply)?,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            writeln!(out, "(You can continue chatting or type /exit to quit)")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Interactive loop over `input`. Blank lines are skipped; /help, /exit, /quit are commands.
pub async fn run_chat_loop<R: BufRead, W: Write>(
    chatbot: &ChatBot,
    first_message: Option<String>,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Relay chat (type /help for commands, /exit to quit)")?;
    writeln!(out)?;

    if let Some(m) = first_message {
        writeln!(out, "> {}", m)?;
        run_one_turn(chatbot, &m, out).await?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        match line.trim() {
            "/help" => {
                print_help(out)?;
                continue;
            }
            "/exit" | "/quit" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => {}
        }

        run_one_turn(chatbot, line, out).await?;
    }
    Ok(())
}
