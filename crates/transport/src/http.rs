//! REST implementation of [`ChatTransport`].
//!
//! `HttpChatTransport` wraps a `reqwest::Client` and POSTs each request as
//! JSON with a bearer token. Non-2xx responses, timeouts, connection
//! errors and unparsable bodies all come back as `Err`. Transient failures
//! (5xx / timeout / connect) are retried with exponential back-off when
//! `max_retries > 0`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use mc_domain::config::{ApiConfig, ResolvedApi};
use mc_domain::error::{Error, Result};
use mc_domain::trace::TraceEvent;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use uuid::Uuid;

use crate::provider::ChatTransport;
use crate::types::{ChatRequest, ChatResponse};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// HTTP client for the chat endpoint.
///
/// Created once at startup and reused for the whole session.
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    http: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
    max_retries: u32,
}

impl HttpChatTransport {
    /// Build a transport from the API config and its resolved endpoint
    /// and token. Empty values are accepted here and fail per request.
    pub fn new(cfg: &ApiConfig, resolved: ResolvedApi) -> Result<Self> {
        let timeout = Duration::from_millis(cfg.timeout_ms);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: resolved.endpoint,
            api_key: resolved.api_key,
            timeout,
            max_retries: cfg.max_retries,
        })
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // ── request helpers ──────────────────────────────────────────────

    /// Decorate a `RequestBuilder` with auth and tracing headers.
    fn decorate(&self, rb: RequestBuilder) -> RequestBuilder {
        let trace_id = Uuid::new_v4().to_string();
        rb.bearer_auth(&self.api_key)
            .header("X-Client-Type", "memchat")
            .header("X-Trace-Id", trace_id)
    }

    // ── retry engine ─────────────────────────────────────────────────

    /// Execute the POST with retry + exponential back-off.
    ///
    /// * Retries on 5xx status codes, timeouts and connection errors.
    /// * Does **not** retry on 4xx (client errors are permanent).
    /// * Emits a `TraceEvent::ChatApiCall` after every attempt.
    async fn execute_with_retry(&self, req: &ChatRequest) -> Result<Response> {
        let mut last_err: Option<Error> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                tokio::time::sleep(backoff).await;
            }

            let start = Instant::now();
            let rb = self.decorate(self.http.post(&self.endpoint).json(req));
            let result = rb.send().await;
            let duration_ms = start.elapsed().as_millis() as u64;

            match result {
                Ok(resp) => {
                    let status = resp.status();

                    TraceEvent::ChatApiCall {
                        status: status.as_u16(),
                        duration_ms,
                        attempt,
                    }
                    .emit();

                    if status.is_success() {
                        return Ok(resp);
                    }

                    let body = resp.text().await.unwrap_or_default();
                    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                        return Err(Error::Auth(format!(
                            "chat API auth failed ({}): {body}",
                            status.as_u16()
                        )));
                    }

                    let err = Error::Status {
                        status: status.as_u16(),
                        body,
                    };
                    if !err.is_transient() {
                        return Err(err);
                    }
                    tracing::debug!(attempt, error = %err, "chat API call failed, may retry");
                    last_err = Some(err);
                }
                Err(e) => {
                    TraceEvent::ChatApiCall {
                        status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                        duration_ms,
                        attempt,
                    }
                    .emit();

                    let err = from_reqwest(e);
                    if !err.is_transient() {
                        return Err(err);
                    }
                    tracing::debug!(attempt, error = %err, "chat API call failed, may retry");
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| Error::Other("chat API: all retries exhausted".into())))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn post(&self, req: &ChatRequest) -> Result<ChatResponse> {
        let resp = self.execute_with_retry(req).await?;

        let body = resp.text().await.map_err(from_reqwest)?;
        serde_json::from_str(&body).map_err(|e| {
            Error::Http(format!("failed to parse chat response: {e}: {body}"))
        })
    }
}

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.
///
/// Timeouts map to [`Error::Timeout`], request-building failures (for
/// example an empty or malformed endpoint URL) to [`Error::Config`], and
/// everything else to [`Error::Http`].
pub fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else if e.is_builder() {
        Error::Config(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}
