//! Who is talking: the bot name (persisted across runs) and the fixed
//! user label.

use std::path::{Path, PathBuf};

use mc_domain::config::SessionConfig;
use mc_domain::error::Result;
use mc_domain::trace::TraceEvent;

/// Reads and writes the single-line bot-name file.
#[derive(Debug, Clone)]
pub struct BotNameStore {
    path: PathBuf,
    default_name: String,
}

impl BotNameStore {
    pub fn new(path: impl Into<PathBuf>, default_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_name: default_name.into(),
        }
    }

    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self::new(&cfg.bot_name_file, &cfg.default_bot_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored name, trimmed. Falls back to the default when the file
    /// is missing, unreadable or blank.
    pub fn load(&self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().to_owned(),
            _ => self.default_name.clone(),
        }
    }

    /// Overwrite the file with exactly `name`.
    pub fn save(&self, name: &str) -> Result<()> {
        std::fs::write(&self.path, name)?;
        TraceEvent::BotNameSaved {
            bot_name: name.to_owned(),
        }
        .emit();
        Ok(())
    }
}

/// The two names attached to every exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub bot_name: String,
    pub user_name: String,
}

impl SessionIdentity {
    pub fn new(bot_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            user_name: user_name.into(),
        }
    }

    /// Pick the bot name for a new session.
    ///
    /// A non-blank `override_name` wins and is written back to the store;
    /// otherwise the stored name is used. A failed write is logged and the
    /// override is still used for this session.
    pub fn resolve(
        store: &BotNameStore,
        override_name: Option<&str>,
        user_name: impl Into<String>,
    ) -> Self {
        let bot_name = match override_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => {
                if let Err(e) = store.save(name) {
                    tracing::warn!(
                        path = %store.path().display(),
                        error = %e,
                        "failed to persist bot name"
                    );
                }
                name.to_owned()
            }
            None => store.load(),
        };
        Self::new(bot_name, user_name)
    }
}
