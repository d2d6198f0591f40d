/// Number of regional sub-brackets.
pub const REGION_COUNT: usize = 4;

/// Seeds per region.
pub const SEEDS_PER_REGION: usize = 16;

/// Minimum field size for a full bracket.
pub const FIELD_SIZE: usize = 64;

/// Canonical first-round seed pairings, in bracket order.
///
/// Covers seeds 1..=16 exactly once; identical in every region.
pub const SEED_MATCHUPS: [(u8, u8); 8] = [
    (1, 16),
    (8, 9),
    (5, 12),
    (4, 13),
    (6, 11),
    (3, 14),
    (7, 10),
    (2, 15),
];

/// Default number of Monte Carlo playouts per batch.
pub const DEFAULT_TRIALS: usize = 2000;

/// Default number of top-ranked brackets returned by the selector.
pub const DEFAULT_TOP_K: usize = 2;

/// Default RNG seed for reproducible batches.
pub const DEFAULT_SEED: u64 = 13;

/// Additive epsilon applied to the losing branch's probability before
/// taking the logarithm, so a certain outcome never produces -inf.
pub const LOG_EPSILON: f64 = 1e-9;
