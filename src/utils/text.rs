//! Case-insensitive text helpers shared by search and comparison
//!
//! All matching in the crate is plain substring matching after case folding.
//! Folding maps each character to a single lowercase character so that
//! positions in the folded text line up with positions in the original,
//! which the excerpt builder relies on.

use smallvec::SmallVec;

/// Marker placed at a truncated excerpt edge.
pub const ELLIPSIS: &str = "...";

/// Key-point words must be longer than this to count as comparison tokens.
pub const SIGNIFICANT_WORD_MIN_CHARS: usize = 4;

/// Significant words of one key point. Most points have fewer than eight.
pub type WordList = SmallVec<[String; 8]>;

fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercase `s` one character at a time (length-preserving in chars).
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Case-insensitive substring test. `needle_folded` must already be folded.
pub fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    fold(haystack).contains(needle_folded)
}

/// Number of non-overlapping occurrences of `needle_folded` in `haystack`.
pub fn count_folded(haystack: &str, needle_folded: &str) -> usize {
    if needle_folded.is_empty() {
        return 0;
    }
    fold(haystack).matches(needle_folded).count()
}

/// Build an excerpt around the first case-insensitive occurrence of `query`.
///
/// Takes up to `before` characters ahead of the match and up to `after`
/// characters from the match start. When the query does not occur in
/// `content`, the leading `after` characters are used. An ellipsis marks
/// each truncated edge.
pub fn excerpt_around(content: &str, query: &str, before: usize, after: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    let folded: Vec<char> = chars.iter().map(|&c| fold_char(c)).collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();

    let first_match = if needle.is_empty() || needle.len() > folded.len() {
        None
    } else {
        folded.windows(needle.len()).position(|w| w == needle.as_slice())
    };

    let (start, end) = match first_match {
        Some(pos) => (pos.saturating_sub(before), (pos + after).min(chars.len())),
        None => (0, after.min(chars.len())),
    };

    let mut excerpt = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.extend(&chars[start..end]);
    if end < chars.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Words of `point` longer than four characters, lowercased.
///
/// Splits on single spaces only, so punctuation stays attached to its word.
pub fn significant_words(point: &str) -> WordList {
    fold(point)
        .split(' ')
        .filter(|w| w.chars().count() > SIGNIFICANT_WORD_MIN_CHARS)
        .map(str::to_string)
        .collect()
}
