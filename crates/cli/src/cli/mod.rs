pub mod chat;
pub mod config;
pub mod run;

use clap::{Parser, Subcommand};

/// memchat — a command-line chat client with rolling conversation memory.
#[derive(Debug, Parser)]
#[command(name = "memchat", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive chat session (default when no subcommand is given).
    Chat {
        /// Bot to chat with; skips the name prompt and becomes the new default.
        #[arg(long)]
        bot: Option<String>,
        /// Print the memory digest to stderr after every reply.
        #[arg(long)]
        show_memory: bool,
    },
    /// Send a single message and print the reply.
    Run {
        /// The message to send.
        message: String,
        /// Bot to chat with; becomes the new default.
        #[arg(long)]
        bot: Option<String>,
        /// Print the full exchange outcome as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any issues.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path in `MEMCHAT_CONFIG` (or
/// `memchat.toml` by default). A missing file means all defaults.
/// Returns the parsed [`Config`](mc_domain::config::Config) and the path
/// that was used.
pub fn load_config() -> anyhow::Result<(mc_domain::config::Config, String)> {
    let config_path =
        std::env::var("MEMCHAT_CONFIG").unwrap_or_else(|_| "memchat.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

pub fn load_config_from(config_path: &str) -> anyhow::Result<mc_domain::config::Config> {
    if !std::path::Path::new(config_path).exists() {
        return Ok(mc_domain::config::Config::default());
    }

    let raw = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))
}
