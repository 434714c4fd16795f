//! End-to-end behaviour of the TextRank summarizer on conversation-shaped
//! input.

use mc_summarizer::{SummarizeError, Summarizer, TextRankSummarizer};

fn script(lines: &[(&str, &str)]) -> String {
    lines
        .iter()
        .map(|(sender, text)| format!("{sender}: {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn empty_text_gives_empty_summary() {
    let summary = TextRankSummarizer::default().summarize("", 0.5).unwrap();
    assert_eq!(summary, "");
}

#[test]
fn single_sentence_is_insufficient() {
    let err = TextRankSummarizer::default()
        .summarize("You: Hello", 0.5)
        .unwrap_err();
    assert_eq!(err, SummarizeError::InsufficientText);
}

#[test]
fn unrelated_sentences_give_empty_summary() {
    let text = script(&[("You", "Hello"), ("Harry Potter", "Greetings")]);
    // "you" is a stopword and nothing else overlaps.
    let summary = TextRankSummarizer::default().summarize(&text, 0.5).unwrap();
    assert_eq!(summary, "");
}

#[test]
fn invalid_ratio_is_rejected() {
    let summarizer = TextRankSummarizer::default();
    assert!(matches!(
        summarizer.summarize("One. Two.", 0.0),
        Err(SummarizeError::InvalidRatio(_))
    ));
    assert!(matches!(
        summarizer.summarize("One. Two.", 1.5),
        Err(SummarizeError::InvalidRatio(_))
    ));
    assert!(matches!(
        summarizer.summarize("One. Two.", f64::NAN),
        Err(SummarizeError::InvalidRatio(_))
    ));
}

#[test]
fn keeps_half_the_sentences_in_original_order() {
    let text = script(&[
        ("You", "Tell me about the Hogwarts castle."),
        ("Harry Potter", "The Hogwarts castle has moving staircases."),
        ("You", "Do the staircases move often?"),
        ("Harry Potter", "The staircases move whenever they like."),
        ("You", "Is the castle scary?"),
        ("Harry Potter", "The castle feels like home to me."),
    ]);

    let summary = TextRankSummarizer::default().summarize(&text, 0.5).unwrap();
    let kept: Vec<&str> = summary.lines().collect();
    assert_eq!(kept.len(), 3);

    let all: Vec<&str> = text.lines().collect();
    let positions: Vec<usize> = kept
        .iter()
        .map(|k| all.iter().position(|l| l == k).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "summary must preserve original order");
}

#[test]
fn full_ratio_keeps_every_connected_sentence() {
    let text = "Owls deliver mail. Owls deliver parcels. Mail and parcels arrive daily.";
    let summary = TextRankSummarizer::default().summarize(text, 1.0).unwrap();
    assert_eq!(summary.lines().count(), 3);
}

#[test]
fn summarizing_is_deterministic() {
    let text = script(&[
        ("You", "What spells do you know?"),
        ("Harry Potter", "I know the disarming spell and the patronus spell."),
        ("You", "Which spell is hardest?"),
        ("Harry Potter", "The patronus spell took months to learn."),
    ]);
    let summarizer = TextRankSummarizer::default();
    let first = summarizer.summarize(&text, 0.5).unwrap();
    let second = summarizer.summarize(&text, 0.5).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
