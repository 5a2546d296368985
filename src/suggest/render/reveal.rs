//! Word-by-word text reveal
//!
//! Suggestion text appears one word at a time after a list arrives.

use std::time::Duration;

/// Number of words visible after `elapsed`, or `None` when everything shows
///
/// The first word is visible immediately; one more appears every `delay`.
/// A zero delay disables the reveal.
pub fn words_revealed(elapsed: Duration, delay: Duration) -> Option<usize> {
    if delay.is_zero() {
        return None;
    }
    let steps = elapsed.as_millis() / delay.as_millis();
    Some(usize::try_from(steps).unwrap_or(usize::MAX).saturating_add(1))
}

/// Prefix of `text` containing its first `count` words
///
/// Spacing inside the prefix is kept as-is; trailing whitespace after the
/// last revealed word is not included.
pub fn reveal_words(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }

    let mut seen = 0;
    let mut in_word = false;
    for (pos, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_word {
                in_word = false;
                if seen == count {
                    return &text[..pos];
                }
            }
        } else if !in_word {
            in_word = true;
            seen += 1;
        }
    }
    text
}

/// Apply an optional word limit to `text`
pub fn revealed(text: &str, limit: Option<usize>) -> &str {
    match limit {
        Some(count) => reveal_words(text, count),
        None => text,
    }
}
