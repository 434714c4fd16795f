use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mc_cli::cli::{Cli, Command, ConfigCommand};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_tracing();
    load_dotenv();

    match cli.command {
        // Default to chat when no subcommand is given.
        None => {
            let (config, _) = mc_cli::cli::load_config()?;
            mc_cli::cli::chat::chat(Arc::new(config), None, false).await
        }
        Some(Command::Chat { bot, show_memory }) => {
            let (config, _) = mc_cli::cli::load_config()?;
            mc_cli::cli::chat::chat(Arc::new(config), bot, show_memory).await
        }
        Some(Command::Run { message, bot, json }) => {
            let (config, _) = mc_cli::cli::load_config()?;
            mc_cli::cli::run::run(Arc::new(config), message, bot, json).await
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            let (config, config_path) = mc_cli::cli::load_config()?;
            let valid = mc_cli::cli::config::validate(&config, &config_path);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let (config, _config_path) = mc_cli::cli::load_config()?;
            mc_cli::cli::config::show(&config)
        }
        Some(Command::Version) => {
            println!("memchat {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Initialize compact stderr-only tracing.
///
/// Defaults to `warn` so diagnostics do not interleave with the chat on
/// stdout. Set `RUST_LOG` for more.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Load `.env` from the working directory into the process environment,
/// if there is one.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to load .env"),
    }
}
