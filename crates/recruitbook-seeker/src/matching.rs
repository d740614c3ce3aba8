//! Case-insensitive string and numeric matching helpers.

/// Returns `true` if the two strings are equal ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Returns `true` if `needle` occurs in `haystack` ignoring case.
///
/// An empty needle is contained in every string.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns `true` if any whitespace-separated word of `sentence` equals
/// `word` ignoring case.
///
/// Partial words never match: `"full"` is not found in `"fully booked"`.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    sentence
        .split_whitespace()
        .any(|candidate| eq_ignore_case(candidate, word))
}

/// Returns `true` if `keyword` parses as an unsigned integer within `range`
/// of `value` (inclusive).
///
/// A keyword that is not a valid `u64` never matches.
pub fn within_range(value: u64, keyword: &str, range: u64) -> bool {
    keyword
        .parse::<u64>()
        .map(|target| value.abs_diff(target) <= range)
        .unwrap_or(false)
}
