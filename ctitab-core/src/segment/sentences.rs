//! Sentence segmentation for narrative cells
//!
//! A sentence ends where a terminator is followed by whitespace and an
//! uppercase letter. Abbreviations are not special-cased: "z. B. Banken"
//! breaks after both "z." and "B.", while "u.a. mehrere" stays whole because
//! a lowercase word follows.

use crate::rules::config::TextRules;
use crate::rules::{RuleSet, UppercaseSet};

/// Splits narrative text at terminator + whitespace + capital
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    terminators: Vec<char>,
    uppercase: UppercaseSet,
}

impl SentenceSegmenter {
    pub fn from_config(text: &TextRules) -> Self {
        Self {
            terminators: text.sentence_terminators.clone(),
            uppercase: UppercaseSet::with_extra(&text.extra_uppercase),
        }
    }

    /// Split text into trimmed, non-empty sentences
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (i, ch) in text.char_indices() {
            if i < start || !self.terminators.contains(&ch) {
                continue;
            }

            let end = i + ch.len_utf8();
            let rest = &text[end..];
            let next = rest.trim_start();
            let gap = rest.len() - next.len();

            if gap > 0 && self.uppercase.starts(next) {
                push_trimmed(&mut sentences, &text[start..end]);
                start = end + gap;
            }
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

/// Split narrative text with the embedded rules
pub fn split_sentences(text: &str) -> Vec<String> {
    RuleSet::embedded().sentences().split(text)
}
