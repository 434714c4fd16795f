//! Conversation state for memchat.
//!
//! Owns the in-memory transcript, the rolling memory digest that is
//! re-derived from it after every exchange, and the persisted bot name.

pub mod identity;
pub mod session;
pub mod transcript;

pub use identity::{BotNameStore, SessionIdentity};
pub use session::{ConversationSession, ExchangeOutcome, FALLBACK_REPLY, SUMMARIZATION_RATIO};
pub use transcript::{Message, Transcript};
