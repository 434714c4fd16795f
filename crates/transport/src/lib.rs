//! `mc-transport` — the HTTP side of a chat exchange.
//!
//! Provides the [`ChatTransport`] trait the session talks to, the wire
//! DTOs ([`ChatRequest`], [`ChatResponse`]), and the production
//! [`HttpChatTransport`] built on `reqwest`.
//!
//! ```rust,no_run
//! use mc_domain::config::ApiConfig;
//! use mc_transport::{ChatRequest, ChatTransport, HttpChatTransport};
//!
//! # async fn example() -> mc_domain::error::Result<()> {
//! let api = ApiConfig::default();
//! let transport = HttpChatTransport::new(&api, api.resolve())?;
//!
//! let resp = transport
//!     .post(&ChatRequest {
//!         memory: String::new(),
//!         prompt: "Hello".into(),
//!         bot_name: "Harry Potter".into(),
//!         user_name: "You".into(),
//!         chat_history: vec![],
//!     })
//!     .await?;
//!
//! println!("{}", resp.reply());
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod provider;
pub mod types;

pub use http::{from_reqwest, HttpChatTransport};
pub use provider::ChatTransport;
pub use types::{ChatRequest, ChatResponse, HistoryEntry};
