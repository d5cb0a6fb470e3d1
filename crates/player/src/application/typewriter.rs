//! Character-by-character text reveal.

/// Delay between revealed characters.
pub const REVEAL_INTERVAL_MS: u64 = 10;

/// Every non-empty prefix of `text`, growing one character at a time.
///
/// Steps by `char`, not byte, so multi-byte characters appear whole.
pub fn reveal_prefixes(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .map(move |(index, ch)| &text[..index + ch.len_utf8()])
}
