//! One conversation: transcript, memory digest and the exchange loop step.
//!
//! After every successful exchange the whole transcript is re-summarized
//! into a fresh digest, which rides along with the next request. The
//! digest is never merged with its predecessor, so it stays bounded by
//! what the summarizer keeps.

use std::sync::Arc;

use mc_domain::error::Error;
use mc_domain::trace::TraceEvent;
use mc_summarizer::{SummarizeError, Summarizer};
use mc_transport::{ChatRequest, ChatTransport};
use serde::Serialize;

use crate::identity::SessionIdentity;
use crate::transcript::{Message, Transcript};

/// Shown to the user when the chat API call fails.
pub const FALLBACK_REPLY: &str = "I'm currently having issues, please try again later.";

/// Fraction of transcript sentences kept in the memory digest.
pub const SUMMARIZATION_RATIO: f64 = 0.5;

/// What happened during one exchange.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExchangeOutcome {
    /// Reply received, both messages recorded, digest refreshed.
    Success { reply: String },
    /// Reply received and recorded, but the digest could not be derived
    /// and is now empty.
    SummarizationError {
        reply: String,
        #[serde(serialize_with = "display")]
        error: SummarizeError,
    },
    /// The API call failed; nothing was recorded.
    TransportError {
        #[serde(serialize_with = "display")]
        error: Error,
    },
}

impl ExchangeOutcome {
    /// The bot's reply, if the exchange reached the API successfully.
    pub fn reply(&self) -> Option<&str> {
        match self {
            ExchangeOutcome::Success { reply } | ExchangeOutcome::SummarizationError { reply, .. } => {
                Some(reply.as_str())
            }
            ExchangeOutcome::TransportError { .. } => None,
        }
    }

    /// Text to show the user: the reply, or [`FALLBACK_REPLY`].
    pub fn into_display_text(self) -> String {
        match self {
            ExchangeOutcome::Success { reply } | ExchangeOutcome::SummarizationError { reply, .. } => {
                reply
            }
            ExchangeOutcome::TransportError { .. } => FALLBACK_REPLY.to_owned(),
        }
    }
}

fn display<T: std::fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Owns all mutable state of a chat session.
pub struct ConversationSession {
    identity: SessionIdentity,
    transcript: Transcript,
    memory: String,
    transport: Arc<dyn ChatTransport>,
    summarizer: Arc<dyn Summarizer>,
}

impl ConversationSession {
    pub fn new(
        identity: SessionIdentity,
        transport: Arc<dyn ChatTransport>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            identity,
            transcript: Transcript::new(),
            memory: String::new(),
            transport,
            summarizer,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current memory digest. Empty before the first exchange and after a
    /// failed summarization.
    pub fn memory(&self) -> &str {
        &self.memory
    }

    /// Number of successful exchanges so far.
    pub fn exchange_count(&self) -> usize {
        self.transcript.len() / 2
    }

    /// Send `user_text` and return the text to show: the bot's reply, or
    /// [`FALLBACK_REPLY`] if the API call failed.
    pub async fn send_message(&mut self, user_text: &str) -> String {
        self.exchange(user_text).await.into_display_text()
    }

    /// Run one exchange and report exactly what happened.
    ///
    /// The request carries the transcript as it was before this call. On
    /// transport failure the transcript and digest are left untouched.
    pub async fn exchange(&mut self, user_text: &str) -> ExchangeOutcome {
        let req = self.build_request(user_text);

        let resp = match self.transport.post(&req).await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::error!(error = %error, "error sending message to chat API");
                TraceEvent::ExchangeFailed {
                    reason: error.to_string(),
                }
                .emit();
                return ExchangeOutcome::TransportError { error };
            }
        };

        let reply = resp.reply().to_owned();
        self.transcript
            .push(Message::new(&self.identity.user_name, user_text));
        self.transcript
            .push(Message::new(&self.identity.bot_name, &reply));

        TraceEvent::ExchangeCompleted {
            transcript_len: self.transcript.len(),
            reply_chars: reply.len(),
        }
        .emit();

        match self.summarize_transcript() {
            Ok(digest) => {
                self.memory = digest;
                ExchangeOutcome::Success { reply }
            }
            Err(error) => {
                tracing::error!(error = %error, "error summarizing conversation");
                self.memory.clear();
                ExchangeOutcome::SummarizationError { reply, error }
            }
        }
    }

    /// Re-derive the digest from the current transcript.
    pub fn summarize_transcript(&self) -> Result<String, SummarizeError> {
        let script = self.transcript.to_script();
        let digest = self.summarizer.summarize(&script, SUMMARIZATION_RATIO)?;

        TraceEvent::MemoryCompacted {
            transcript_lines: self.transcript.len(),
            digest_chars: digest.len(),
        }
        .emit();

        Ok(digest)
    }

    fn build_request(&self, user_text: &str) -> ChatRequest {
        ChatRequest {
            memory: self.memory.clone(),
            prompt: user_text.to_owned(),
            bot_name: self.identity.bot_name.clone(),
            user_name: self.identity.user_name.clone(),
            chat_history: self.transcript.to_history(),
        }
    }
}
