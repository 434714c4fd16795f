use serde::Serialize;

/// Structured trace events emitted across all memchat crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ChatApiCall {
        status: u16,
        duration_ms: u64,
        attempt: u32,
    },
    ExchangeCompleted {
        transcript_len: usize,
        reply_chars: usize,
    },
    ExchangeFailed {
        reason: String,
    },
    MemoryCompacted {
        transcript_lines: usize,
        digest_chars: usize,
    },
    BotNameSaved {
        bot_name: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "mc_event");
    }
}
