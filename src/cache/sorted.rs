//! Sorted-Set Encoding
//!
//! A sorted set is emulated inside one string value as `score-member` pairs
//! joined by `.`, in insertion order: `"1-one.2-two"`. Pairs are never
//! re-sorted or de-duplicated, and rank is the insertion position.

/// Separator between encoded pairs.
pub const PAIR_SEPARATOR: char = '.';

/// Separator between the score and the member inside a pair.
pub const SCORE_SEPARATOR: char = '-';

// == Append ==
/// Appends a `score-member` pair to an existing encoding.
///
/// A blank existing value (empty or whitespace only) starts a fresh encoding.
pub fn append_pair(existing: &str, score: i64, member: &str) -> String {
    if existing.trim().is_empty() {
        format!("{score}{SCORE_SEPARATOR}{member}")
    } else {
        format!("{existing}{PAIR_SEPARATOR}{score}{SCORE_SEPARATOR}{member}")
    }
}

// == Cardinality ==
/// Counts encoded pairs, duplicates included.
///
/// This is the raw segment count, so any stored string counts as at least one.
pub fn cardinality(encoded: &str) -> usize {
    encoded.split(PAIR_SEPARATOR).count()
}

// == Members ==
/// Yields the member of every pair in insertion order.
///
/// The member is the last `-`-separated component of a pair. A pair with no
/// separator yields the whole segment.
pub fn members(encoded: &str) -> impl Iterator<Item = &str> {
    encoded
        .split(PAIR_SEPARATOR)
        .map(|pair| pair.rsplit(SCORE_SEPARATOR).next().unwrap_or(pair))
}

// == Rank ==
/// Returns the zero-based insertion position of the first pair naming `member`.
pub fn rank_of(encoded: &str, member: &str) -> Option<usize> {
    members(encoded).position(|candidate| candidate == member)
}
