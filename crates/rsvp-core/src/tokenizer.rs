//! Whitespace tokenizer producing the word sequence shown by the reader.

use alloc::vec::Vec;
use core::ops::Range;

/// Byte ranges of every word in `text`, in reading order.
///
/// Words are maximal runs of non-whitespace characters. Leading, trailing and
/// repeated whitespace never yields an empty word.
pub fn token_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    while let Some(span) = next_word_at(text, cursor) {
        cursor = span.end;
        spans.push(span);
    }

    spans
}

/// Splits `text` into its words.
pub fn tokenize(text: &str) -> Vec<&str> {
    token_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

pub fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some(span) = next_word_at(text, cursor) {
        count += 1;
        cursor = span.end;
    }

    count
}

fn next_word_at(text: &str, cursor: usize) -> Option<Range<usize>> {
    let rest = text.get(cursor..)?;
    let start = cursor + rest.find(|c: char| !c.is_whitespace())?;
    let end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |offset| start + offset);

    Some(start..end)
}
