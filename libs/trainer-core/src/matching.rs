//! Tolerant answer matching for free-text translation drills.
//!
//! A strict equality check produces far too many false negatives on
//! free-text translations, so acceptance cascades through three rules:
//! normalized equality, token overlap against the reference, and a
//! Levenshtein-distance fallback. Two threshold presets circulated in
//! earlier versions of the trainer; both are kept as named configs.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Thresholds for the acceptance cascade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum fraction of reference tokens the answer must cover.
    pub token_overlap_threshold: f64,
    /// Edit-distance budget as a fraction of the reference length.
    pub edit_distance_tolerance: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl MatchConfig {
    /// The default preset: forgiving of dropped articles and short answers.
    pub fn lenient() -> Self {
        Self {
            token_overlap_threshold: 0.40,
            edit_distance_tolerance: 0.30,
        }
    }

    /// The tighter preset: demands over half the reference tokens and only
    /// small typos.
    pub fn strict() -> Self {
        Self {
            token_overlap_threshold: 0.55,
            edit_distance_tolerance: 0.18,
        }
    }
}

/// Which rule of the cascade accepted the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Exact,
    TokenOverlap,
    EditDistance,
    Rejected,
}

/// Result of comparing a typed answer to the reference translation.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub is_correct: bool,
    pub strategy: MatchStrategy,
    /// Normalized typed answer (for display).
    pub user_normalized: String,
    /// Normalized reference (for display).
    pub reference_normalized: String,
}

/// Compare a typed answer to the reference translation.
///
/// An empty answer never matches a non-empty reference. An empty reference
/// gets an edit-distance budget of zero, so only an empty answer matches it.
pub fn compare_answers(user: &str, reference: &str, config: &MatchConfig) -> MatchResult {
    let user_normalized = normalize(user);
    let reference_normalized = normalize(reference);

    let strategy = decide(&user_normalized, &reference_normalized, config);

    MatchResult {
        is_correct: strategy != MatchStrategy::Rejected,
        strategy,
        user_normalized,
        reference_normalized,
    }
}

/// Boolean accept/reject decision under the given thresholds.
pub fn is_acceptable_match(user: &str, reference: &str, config: &MatchConfig) -> bool {
    compare_answers(user, reference, config).is_correct
}

fn decide(user: &str, reference: &str, config: &MatchConfig) -> MatchStrategy {
    if user.is_empty() {
        return MatchStrategy::Rejected;
    }

    if user == reference {
        return MatchStrategy::Exact;
    }

    if token_overlap_ratio(user, reference) >= config.token_overlap_threshold {
        return MatchStrategy::TokenOverlap;
    }

    let max_distance =
        (reference.chars().count() as f64 * config.edit_distance_tolerance).ceil() as usize;
    if levenshtein_distance(user, reference) <= max_distance {
        return MatchStrategy::EditDistance;
    }

    MatchStrategy::Rejected
}

/// Fraction of the user's tokens found anywhere in the reference, relative
/// to the reference token count. Membership test, not position-aligned:
/// `"going to market"` covers 3 of the 6 tokens of
/// `"i am going to the market"`.
pub fn token_overlap_ratio(user_normalized: &str, reference_normalized: &str) -> f64 {
    let reference_tokens: Vec<&str> = reference_normalized.split_whitespace().collect();
    let common = user_normalized
        .split_whitespace()
        .filter(|t| reference_tokens.contains(t))
        .count();
    common as f64 / reference_tokens.len().max(1) as f64
}

/// Levenshtein distance over Unicode code points.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix.
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
