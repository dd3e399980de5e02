//! Whitespace tokenization.

/// Split `input` on ASCII whitespace into a token sequence.
///
/// No quoting or escaping semantics; blank input yields an empty sequence.
#[must_use]
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_ascii_whitespace().collect()
}
