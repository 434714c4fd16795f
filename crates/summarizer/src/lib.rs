//! `mc-summarizer` — extractive summarization for the memory digest.
//!
//! Provides the [`Summarizer`] trait that the session layer depends on,
//! and [`TextRankSummarizer`], a graph-based extractive summarizer that
//! keeps the most central sentences of a text in their original order.
//!
//! ```rust
//! use mc_summarizer::{Summarizer, TextRankSummarizer};
//!
//! let text = "Rust has ownership. Ownership prevents data races. \
//!             Cats are nice. Data races are bugs in ownership models.";
//! let summary = TextRankSummarizer::default().summarize(text, 0.5).unwrap();
//! assert_eq!(summary.lines().count(), 2);
//! ```

pub mod sentences;
pub mod textrank;

pub use textrank::TextRankSummarizer;

/// Failure modes of a summarizer.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// The text holds a single sentence; there is nothing to rank it against.
    #[error("input must have more than one sentence")]
    InsufficientText,

    #[error("ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),
}

/// Anything that can compress a text down to a fraction of its sentences.
///
/// Implementations must be pure: the same input yields the same output
/// and no state carries over between calls.
pub trait Summarizer: Send + Sync {
    /// Summarize `text`, keeping roughly `ratio` of its sentences.
    fn summarize(&self, text: &str, ratio: f64) -> Result<String, SummarizeError>;
}
