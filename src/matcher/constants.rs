/// Lowest score a catalog entry may have and still be offered as a candidate.
pub const MIN_MATCH_SCORE: f64 = 80.0;

/// Scores at or above this are used without asking the user.
pub const AUTO_ACCEPT_SCORE: f64 = 91.0;

/// Query text that ends the session.
pub const DONE_TOKEN: &str = "done";

// ─────────────────────────────────────────────────────────────────────────────
// Weighted ratio tuning
// ─────────────────────────────────────────────────────────────────────────────

/// Length ratio below which strings are compared whole rather than partially.
pub const PARTIAL_LEN_RATIO: f64 = 1.5;

/// Length ratio at which partial matches are heavily discounted.
pub const LONG_LEN_RATIO: f64 = 8.0;

/// Discount applied to token-based scores.
pub const TOKEN_SCALE: f64 = 0.95;

/// Discount applied to partial scores for moderately different lengths.
pub const PARTIAL_SCALE: f64 = 0.9;

/// Discount applied to partial scores when one string is much longer.
pub const LONG_PARTIAL_SCALE: f64 = 0.6;
