//! Text helpers shared by routing, retrieval, and the static fact rules.

/// Lower-cased, trimmed form used for cache keys and keyword matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Lower-cased word tokens. Hyphens stay inside a token so `cse-aiml` is one word.
pub fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .map(|t| t.trim_matches('-'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when `phrase` occurs in `text` starting at a word boundary.
///
/// Only the start is anchored, so `my result` matches `my results` while
/// `rate` does not match `corporate`. Both sides are expected lower-cased.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let anchored = phrase.chars().next().is_some_and(char::is_alphanumeric);
    text.match_indices(phrase).any(|(idx, _)| {
        !anchored
            || text[..idx]
                .chars()
                .next_back()
                .map_or(true, |prev| !prev.is_alphanumeric())
    })
}

/// True when any of `phrases` matches `text` per [`contains_phrase`].
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| contains_phrase(text, p))
}

/// True when `word` is one of the whole-word tokens of `text`.
pub fn has_word(text: &str, word: &str) -> bool {
    tokens(text).iter().any(|t| t == word)
}

/// Truncate on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
