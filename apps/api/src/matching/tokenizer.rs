//! Tokenizer: splits free-text skill and requirement fields into normalized tokens.

const DELIMITERS: &[char] = &[',', ' ', '/', '-', '|', '\n'];
const STOP_WORDS: &[&str] = &["and", "or"];

/// Splits `text` on comma, space, slash, hyphen, pipe and newline.
///
/// Every fragment is lower-cased and trimmed. Fragments of at most one
/// character and the stop-words "and"/"or" are dropped. First-occurrence
/// order is kept and duplicates are not removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(DELIMITERS)
        .map(|fragment| fragment.to_lowercase().trim().to_string())
        .filter(|token| token.chars().count() > 1 && !STOP_WORDS.contains(&token.as_str()))
        .collect()
}
