//! Terminal chat loop.
//!
//! Reads lines from the input, dispatches slash commands, and prints
//! replies as they stream in. Switching personality clears the
//! conversation here; the session itself never does that on its own.

use std::io::Write;

use futures_util::StreamExt;
use muskito_ai::{PersonalityMode, Role, Session, SessionError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::commands::{Command, HELP};

/// How replies are fetched and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    Streaming,
    Whole,
}

/// Run the chat loop until `/quit` or end of input.
pub async fn run<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    reply_mode: ReplyMode,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    print_banner(out, session.mode())?;
    writeln!(out, "Type /help for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "\nyou> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Clear => {
                session.clear_history();
                writeln!(out, "Conversation cleared.")?;
            }
            Command::History => print_history(out, session)?,
            Command::Mode(None) => print_modes(out, session.mode())?,
            Command::Mode(Some(id)) => switch_mode(out, session, &id)?,
            Command::Unknown(name) => {
                writeln!(out, "Unknown command '/{name}'. Type /help for commands.")?
            }
            Command::Say(text) => match reply_mode {
                ReplyMode::Streaming => say_streaming(out, session, text).await?,
                ReplyMode::Whole => say_whole(out, session, text).await?,
            },
        }
    }

    info!(messages = session.message_count(), "Chat loop finished");
    Ok(())
}

fn switch_mode<W: Write>(out: &mut W, session: &mut Session, id: &str) -> std::io::Result<()> {
    let previous = session.mode();
    match session.set_mode(id) {
        Ok(()) if session.mode() == previous => {
            writeln!(out, "Already in {} mode.", previous.label())
        }
        Ok(()) => {
            // Fresh start for the new personality
            session.clear_history();
            print_banner(out, session.mode())
        }
        Err(e) => writeln!(out, "{e}"),
    }
}

async fn say_streaming<W: Write>(
    out: &mut W,
    session: &mut Session,
    text: String,
) -> std::io::Result<()> {
    let mut reply = match session.chat_stream(text).await {
        Ok(reply) => reply,
        Err(e) => return report(out, &e),
    };

    write!(out, "muskito> ")?;
    while let Some(fragment) = reply.next().await {
        match fragment {
            Ok(fragment) => {
                write!(out, "{fragment}")?;
                out.flush()?;
            }
            Err(e) => {
                writeln!(out)?;
                return report(out, &e);
            }
        }
    }
    writeln!(out)
}

async fn say_whole<W: Write>(
    out: &mut W,
    session: &mut Session,
    text: String,
) -> std::io::Result<()> {
    match session.chat(text).await {
        Ok(reply) => writeln!(out, "muskito> {reply}"),
        Err(e) => report(out, &e),
    }
}

fn report<W: Write>(out: &mut W, error: &SessionError) -> std::io::Result<()> {
    warn!("Reply failed: {error}");
    writeln!(out, "[error] {error}")
}

fn print_banner<W: Write>(out: &mut W, mode: PersonalityMode) -> std::io::Result<()> {
    writeln!(out, "🦄 Muskito | Current mode: {}", mode.label())?;
    writeln!(out, "{}", mode.tagline())
}

fn print_modes<W: Write>(out: &mut W, current: PersonalityMode) -> std::io::Result<()> {
    for mode in PersonalityMode::ALL {
        let marker = if mode == current { '*' } else { ' ' };
        writeln!(out, "{marker} {:<18} {}", mode.as_str(), mode.label())?;
    }
    Ok(())
}

fn print_history<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    if session.history().is_empty() {
        return writeln!(out, "(no messages yet)");
    }
    for message in session.history() {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "muskito",
            Role::System => "system",
        };
        writeln!(out, "{who}> {}", message.content)?;
    }
    Ok(())
}
