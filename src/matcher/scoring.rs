//! Approximate string similarity on a 0–100 scale.
//!
//! `weighted_ratio` blends whole-string, token-order-insensitive and
//! substring scores so that typos, reordered words and partial names all
//! land close to the intended entry.

use std::collections::BTreeSet;

use crate::matcher::constants::{
    LONG_LEN_RATIO, LONG_PARTIAL_SCALE, PARTIAL_LEN_RATIO, PARTIAL_SCALE, TOKEN_SCALE,
};

/// Trim and lowercase a user query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Lowercase, replace punctuation with spaces and collapse whitespace.
pub fn preprocess(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length of the longest common subsequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { above.max(row[j]) };
            diag = above;
        }
    }
    row[b.len()]
}

/// Whole-string similarity: normalized Indel, `2 * lcs / (len_a + len_b)`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    (2 * lcs_len(&a, &b)) as f64 / total as f64 * 100.0
}

/// Best similarity of the shorter string against any same-length window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short_len = short.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        best = best.max(ratio(short, &candidate));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_set(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

fn join_sets<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().collect::<Vec<_>>().join(" ")
}

/// Similarity ignoring word order.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Similarity of shared words plus each side's leftovers.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);

    let shared = join_sets(set_a.intersection(&set_b).copied());
    let only_a = join_sets(set_a.difference(&set_b).copied());
    let only_b = join_sets(set_b.difference(&set_a).copied());

    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let combine = |rest: &str| {
        if shared.is_empty() {
            rest.to_string()
        } else {
            format!("{} {}", shared, rest)
        }
    };
    let combined_a = combine(&only_a);
    let combined_b = combine(&only_b);

    let mut best = ratio(&combined_a, &combined_b);
    if !shared.is_empty() {
        best = best
            .max(ratio(&shared, &combined_a))
            .max(ratio(&shared, &combined_b));
    }
    best
}

/// Partial similarity ignoring word order; any shared word is a full match.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);
    if set_a.intersection(&set_b).next().is_some() {
        return 100.0;
    }
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Combined fuzzy score in `[0, 100]`.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let a = preprocess(a);
    let b = preprocess(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let whole = ratio(&a, &b);

    let score = if len_ratio < PARTIAL_LEN_RATIO {
        let token = token_sort_ratio(&a, &b).max(token_set_ratio(&a, &b));
        whole.max(token * TOKEN_SCALE)
    } else {
        let scale = if len_ratio >= LONG_LEN_RATIO {
            LONG_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        whole
            .max(partial_ratio(&a, &b) * scale)
            .max(partial_token_ratio(&a, &b) * TOKEN_SCALE * scale)
    };

    score.clamp(0.0, 100.0)
}
