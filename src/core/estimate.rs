use crate::consts::CHARS_PER_TOKEN;

/// Approximate token count: one token per four characters, rounded down.
///
/// This is a length heuristic, not a tokenizer. Characters are Unicode scalar
/// values, so multi-byte text is not inflated by its UTF-8 encoding.
pub(crate) fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() / CHARS_PER_TOKEN) as u64
}
