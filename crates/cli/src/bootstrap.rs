//! Wire a [`ConversationSession`] together from the resolved config.

use std::sync::Arc;

use anyhow::Context;
use mc_domain::config::Config;
use mc_sessions::{BotNameStore, ConversationSession, SessionIdentity};
use mc_summarizer::TextRankSummarizer;
use mc_transport::HttpChatTransport;

/// Resolve who is talking for this run. A non-blank `bot_override` is
/// persisted as the new default.
pub fn resolve_identity(config: &Config, bot_override: Option<&str>) -> SessionIdentity {
    let store = BotNameStore::from_config(&config.session);
    SessionIdentity::resolve(&store, bot_override, config.session.user_name.clone())
}

/// Build the session with the HTTP transport and TextRank summarizer.
///
/// The endpoint and token are read from the environment exactly once,
/// here. Missing values are not an error; each exchange will fail and
/// show the fallback reply instead.
pub fn build_session(
    config: &Config,
    identity: SessionIdentity,
) -> anyhow::Result<ConversationSession> {
    let resolved = config.api.resolve();
    if resolved.endpoint.is_empty() {
        tracing::debug!(
            env = %config.api.endpoint_env,
            "no chat endpoint configured"
        );
    }

    let transport =
        HttpChatTransport::new(&config.api, resolved).context("building chat API client")?;

    tracing::debug!(
        endpoint = %transport.endpoint(),
        timeout_ms = transport.timeout().as_millis() as u64,
        bot_name = %identity.bot_name,
        "session ready"
    );

    Ok(ConversationSession::new(
        identity,
        Arc::new(transport),
        Arc::new(TextRankSummarizer::default()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_persisted_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.session.bot_name_file = dir.path().join("bot.txt");

        let identity = resolve_identity(&config, Some("Sirius"));
        assert_eq!(identity.bot_name, "Sirius");
        assert_eq!(identity.user_name, "You");

        let again = resolve_identity(&config, None);
        assert_eq!(again.bot_name, "Sirius");
    }

    #[test]
    fn fresh_session_is_empty() {
        let config = Config::default();
        let session =
            build_session(&config, SessionIdentity::new("Harry Potter", "You")).unwrap();
        assert!(session.transcript().is_empty());
        assert_eq!(session.memory(), "");
    }
}
