//! # Medi Wizard Interactive Chat
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `medi-wizard chat`, a REPL that runs one consultation over
//! stdin/stdout.
//!
//! ## Architecture
//!
//! The loop reads one line, waits the reply delay, hands the line and the
//! current `Session` to the `Wizard`, prints the reply and keeps the returned
//! session. Lines are processed strictly in the order they arrive, so input
//! typed (or piped) ahead of a delayed reply simply queues up.
//!
//! - Blank lines are skipped without a reply.
//! - `/quit`, `/exit` or end of input ends the chat.
//! - Reply markup is rendered bold on a terminal (see `common::ui`).
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session
//! medi-wizard chat
//!
//! # Scripted session without the thinking delay
//! printf 'anna\n34\nfemale\nsevere acne\n' | medi-wizard chat --delay-ms 0
//! ```
//!
use super::options::{CatalogArgs, DelayArgs};
use crate::common::ui::{self, MarkupStyle};
use crate::consult::{Session, Wizard};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const BOT_LABEL: &str = "Medi Wizard";
const USER_PROMPT: &str = "You: ";
const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];
const FAREWELL: &str = "Goodbye! Take care of yourself.";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub delay: DelayArgs,

    /// Print replies exactly as produced, without terminal styling.
    #[arg(long)]
    pub plain: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration and the catalog, then runs a consultation on the
/// process's stdin and stdout until the user quits.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let config = config::load_config()?;
    let wizard = Wizard::new(args.catalog.load(&config)?);
    let delay = args.delay.resolve(&config);
    let style = if args.plain {
        MarkupStyle::Raw
    } else {
        MarkupStyle::detect()
    };

    run_session(
        &wizard,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        delay,
        style,
    )
    .await
}

/// Runs one consultation over any line reader and writer.
pub async fn run_session<R, W>(
    wizard: &Wizard,
    reader: R,
    mut writer: W,
    delay: Duration,
    style: MarkupStyle,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_bot_message(&mut writer, wizard.opening(), style).await?;

    let mut session = Session::new();
    let mut lines = reader.lines();
    let mut turns = 0usize;

    loop {
        writer.write_all(USER_PROMPT.as_bytes()).await?;
        writer.flush().await.context("Failed to flush stdout")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            debug!("End of input reached.");
            writer.write_all(b"\n").await?;
            break;
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&trimmed) {
            break;
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let (next, reply) = wizard.respond(session, &line);
        session = next;
        turns += 1;
        debug!("Turn {} complete; stage is now {:?}.", turns, session.stage());

        write_bot_message(&mut writer, &reply, style).await?;
    }

    write_bot_message(&mut writer, FAREWELL, style).await?;
    info!("Chat ended after {} turn(s).", turns);
    Ok(())
}

async fn write_bot_message<W>(writer: &mut W, text: &str, style: MarkupStyle) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let rendered = ui::render(text, style);
    writer
        .write_all(format!("{}: {}\n\n", BOT_LABEL, rendered).as_bytes())
        .await
        .context("Failed to write reply")?;
    writer.flush().await.context("Failed to flush stdout")?;
    Ok(())
}
