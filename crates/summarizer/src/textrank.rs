//! TextRank: rank sentences by centrality in a word-overlap graph.
//!
//! Each sentence is a node; two sentences are linked with weight
//! `shared_words / (log10(len_a) + log10(len_b))`. Weighted PageRank over
//! that graph scores every sentence, and the best-scoring fraction is
//! returned in its original order.

use std::collections::HashSet;

use crate::sentences::{split_sentences, tokenize};
use crate::{SummarizeError, Summarizer};

const DEFAULT_DAMPING: f64 = 0.85;
const DEFAULT_TOLERANCE: f64 = 1e-6;
const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Extractive summarizer based on TextRank.
#[derive(Debug, Clone)]
pub struct TextRankSummarizer {
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TextRankSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the PageRank damping factor (default 0.85).
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Score every sentence of `text`. Returns `(sentence, score)` pairs in
    /// original order; sentences with no overlap with any other sentence
    /// score `0.0`.
    pub fn rank(&self, text: &str) -> Vec<(String, f64)> {
        let sentences = split_sentences(text);
        let tokens: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();
        let weights = similarity_matrix(&tokens);
        let scores = self.pagerank(&weights);
        sentences.into_iter().zip(scores).collect()
    }

    /// Weighted PageRank by power iteration over the nodes that have at
    /// least one positive edge. Isolated nodes keep a score of zero.
    fn pagerank(&self, weights: &[Vec<f64>]) -> Vec<f64> {
        let n = weights.len();
        let out_weight: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();
        let live: Vec<usize> = (0..n).filter(|&i| out_weight[i] > 0.0).collect();

        let mut scores = vec![0.0; n];
        if live.is_empty() {
            return scores;
        }

        let live_count = live.len() as f64;
        for &i in &live {
            scores[i] = 1.0 / live_count;
        }

        for iteration in 0..self.max_iterations {
            let mut next = vec![0.0; n];
            let mut delta: f64 = 0.0;

            for &i in &live {
                let incoming: f64 = live
                    .iter()
                    .filter(|&&j| weights[j][i] > 0.0)
                    .map(|&j| weights[j][i] / out_weight[j] * scores[j])
                    .sum();
                next[i] = (1.0 - self.damping) / live_count + self.damping * incoming;
                delta = delta.max((next[i] - scores[i]).abs());
            }

            scores = next;
            if delta < self.tolerance {
                tracing::trace!(iteration, "pagerank converged");
                break;
            }
        }

        scores
    }
}

impl Summarizer for TextRankSummarizer {
    fn summarize(&self, text: &str, ratio: f64) -> Result<String, SummarizeError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SummarizeError::InvalidRatio(ratio));
        }

        let ranked = self.rank(text);
        match ranked.len() {
            0 => return Ok(String::new()),
            1 => return Err(SummarizeError::InsufficientText),
            _ => {}
        }

        if ranked.iter().all(|(_, score)| *score == 0.0) {
            return Ok(String::new());
        }

        let keep = (ranked.len() as f64 * ratio).floor() as usize;

        let mut order: Vec<usize> = (0..ranked.len()).collect();
        order.sort_by(|&a, &b| ranked[b].1.total_cmp(&ranked[a].1).then(a.cmp(&b)));
        let mut chosen: Vec<usize> = order.into_iter().take(keep).collect();
        chosen.sort_unstable();

        Ok(chosen
            .into_iter()
            .map(|i| ranked[i].0.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Pairwise sentence similarity. The diagonal is zero.
fn similarity_matrix(tokens: &[Vec<String>]) -> Vec<Vec<f64>> {
    let n = tokens.len();
    let sets: Vec<HashSet<&str>> = tokens
        .iter()
        .map(|t| t.iter().map(String::as_str).collect())
        .collect();

    let mut weights = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w = similarity(&tokens[i], &sets[i], &tokens[j], &sets[j]);
            weights[i][j] = w;
            weights[j][i] = w;
        }
    }
    weights
}

fn similarity(a: &[String], a_set: &HashSet<&str>, b: &[String], b_set: &HashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a_set.intersection(b_set).count() as f64;
    let norm = (a.len() as f64).log10() + (b.len() as f64).log10();
    if norm == 0.0 {
        return 0.0;
    }
    common / norm
}
