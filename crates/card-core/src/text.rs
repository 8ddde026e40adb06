//! Label helpers.

/// Pluralize `word` for `count`: unchanged for exactly one, `s` appended otherwise.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Count-prefixed label, e.g. `"3 Colors"` or `"1 Color"`.
pub fn count_label(word: &str, count: u32) -> String {
    format!("{} {}", count, pluralize(word, count))
}
