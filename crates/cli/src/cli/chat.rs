//! `memchat chat` — interactive REPL command.
//!
//! Asks which bot to talk to, then reads lines with rustyline and sends
//! each one as a user turn until `quit`/`exit` or end of input.

use std::sync::Arc;

use mc_domain::config::Config;
use mc_sessions::{BotNameStore, ConversationSession};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::bootstrap;

const RULE: &str = "_____________________________________________\n";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Public entry point
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run the interactive chat REPL.
///
/// When `bot` is given the name prompt is skipped. Transport and
/// summarization problems never end the loop; only `quit`, `exit` or
/// end of input do.
pub async fn chat(config: Arc<Config>, bot: Option<String>, show_memory: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("{RULE}");
    println!("CHATBOT SESSION STARTED. Type 'quit' to exit.");
    println!("{RULE}");

    let bot_override = match bot {
        Some(name) => Some(name),
        None => {
            let last = BotNameStore::from_config(&config.session).load();
            println!("The last bot you chatted with was {last}.");
            let answer = prompt_bot_name(&mut rl)?;
            println!("{RULE}");
            answer
        }
    };

    let identity = bootstrap::resolve_identity(&config, bot_override.as_deref());
    let mut session = bootstrap::build_session(&config, identity)?;

    run_loop(&mut rl, &mut session, show_memory).await;

    println!("{RULE}");
    println!("EXITING CHAT SESSION.");
    println!("{RULE}");

    tracing::debug!(
        exchanges = session.exchange_count(),
        "chat session ended"
    );

    Ok(())
}

/// Whether a line ends the session.
pub fn is_exit_command(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit")
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Ask for an optional bot name. Empty input, Ctrl+C or Ctrl+D keep the
/// stored one.
fn prompt_bot_name(rl: &mut DefaultEditor) -> anyhow::Result<Option<String>> {
    match rl.readline(
        "Please enter the name of the bot you'd like to chat with, or press enter to continue: ",
    ) {
        Ok(line) if !line.trim().is_empty() => Ok(Some(line.trim().to_owned())),
        Ok(_) | Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn run_loop(rl: &mut DefaultEditor, session: &mut ConversationSession, show_memory: bool) {
    let prompt = format!("{}: ", session.identity().user_name);

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if is_exit_command(&line) {
                    break;
                }
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok();
                }

                let reply = session.send_message(&line).await;
                println!("{}: {reply}", session.identity().bot_name);

                if show_memory {
                    eprintln!("\x1B[2m[memory] {}\x1B[0m", session.memory());
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("(Type 'quit' or press Ctrl+D to exit)");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("\x1B[31mreadline error: {e}\x1B[0m");
                break;
            }
        }
    }
}
