//! `memchat run` — one-shot exchange.
//!
//! Sends a single message, prints the reply and exits. Useful for
//! scripting and for checking that the endpoint and token work.

use std::sync::Arc;

use mc_domain::config::Config;
use mc_sessions::ExchangeOutcome;

use crate::bootstrap;

/// Execute a single exchange and print the result.
///
/// Exits with code 1 when the API call failed, after printing the
/// fallback reply (or the outcome JSON).
pub async fn run(
    config: Arc<Config>,
    message: String,
    bot: Option<String>,
    json_output: bool,
) -> anyhow::Result<()> {
    let identity = bootstrap::resolve_identity(&config, bot.as_deref());
    let mut session = bootstrap::build_session(&config, identity)?;

    let outcome = session.exchange(&message).await;
    let failed = matches!(outcome, ExchangeOutcome::TransportError { .. });

    if json_output {
        let json = serde_json::to_string_pretty(&outcome)
            .map_err(|e| anyhow::anyhow!("serializing outcome: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", outcome.into_display_text());
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
