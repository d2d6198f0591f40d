use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::bracket::Matchup;
use crate::constants::{DEFAULT_SEED, DEFAULT_TOP_K, DEFAULT_TRIALS};
use crate::error::BracketError;
use crate::oracle::ProbabilityOracle;
use crate::simulate::{simulate_once, BracketResult};

/// Batch parameters for the Monte Carlo selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of independent playouts.
    pub trials: usize,

    /// How many top-ranked brackets to keep.
    pub top_k: usize,

    /// Seed for the batch's random stream.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            trials: DEFAULT_TRIALS,
            top_k: DEFAULT_TOP_K,
            seed: DEFAULT_SEED,
        }
    }
}

/// Run a batch of playouts and keep the most probable brackets.
///
/// All trials draw sequentially from one ChaCha stream seeded by
/// `config.seed`, so identical inputs reproduce identical output bit for
/// bit. Results are ranked by log-probability, highest first; ties keep
/// the order the trials ran in.
///
/// A prediction failure in any trial aborts the entire batch: a batch
/// with silently dropped trials would no longer be a like-for-like
/// comparison across runs.
pub fn select_top<O>(
    first_round: &[Matchup],
    oracle: &O,
    config: &SimConfig,
) -> Result<Vec<BracketResult>, BracketError>
where
    O: ProbabilityOracle + ?Sized,
{
    debug!(
        trials = config.trials,
        seed = config.seed,
        "running bracket batch"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.trials);
    for _ in 0..config.trials {
        results.push(simulate_once(first_round, oracle, &mut rng)?);
    }

    rank(&mut results, config.top_k);
    debug!(kept = results.len(), "bracket batch complete");
    Ok(results)
}

/// Parallel variant of [`select_top`].
///
/// Each trial gets its own ChaCha stream, seeded up front from the master
/// stream, so the batch stays deterministic without serializing the
/// trials. Output is reproducible for a fixed seed but not bit-identical
/// to the sequential selector, which threads one stream through every
/// trial. The abort-on-failure policy is the same.
pub fn select_top_parallel<O>(
    first_round: &[Matchup],
    oracle: &O,
    config: &SimConfig,
) -> Result<Vec<BracketResult>, BracketError>
where
    O: ProbabilityOracle + ?Sized,
{
    debug!(
        trials = config.trials,
        seed = config.seed,
        "running parallel bracket batch"
    );

    let mut master = ChaCha8Rng::seed_from_u64(config.seed);
    let trial_seeds: Vec<u64> = (0..config.trials).map(|_| master.gen()).collect();

    let mut results = trial_seeds
        .into_par_iter()
        .map(|trial_seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(trial_seed);
            simulate_once(first_round, oracle, &mut rng)
        })
        .collect::<Result<Vec<_>, _>>()?;

    rank(&mut results, config.top_k);
    debug!(kept = results.len(), "bracket batch complete");
    Ok(results)
}

/// Stable descending sort by log-probability, truncated to the top k.
fn rank(results: &mut Vec<BracketResult>, top_k: usize) {
    results.sort_by(|a, b| b.log_probability.total_cmp(&a.log_probability));
    results.truncate(top_k);
}
