//! Bracket Core - tournament bracket construction and Monte Carlo playout.
//!
//! Builds a 64-team, four-region single-elimination bracket from a ranked
//! field (snake seeding, canonical first-round seed pairings), plays it out
//! repeatedly against a pairwise win-probability oracle, and ranks the
//! simulated brackets by joint log-probability.
//!
//! ```
//! use bracket_core::{assign_seeds, build_first_round, select_top, FieldEntry, SimConfig};
//! # use bracket_core::{BracketError, MarginModel, StatsOracle};
//! # use std::collections::HashMap;
//! # fn main() -> Result<(), BracketError> {
//! let field: Vec<FieldEntry> = (0..64)
//!     .map(|i| FieldEntry::new(format!("School {i}"), 100.0 - i as f64))
//!     .collect();
//! # let stats = field
//! #     .iter()
//! #     .map(|e| (e.school.clone(), HashMap::from([("SRS".to_string(), e.strength)])))
//! #     .collect();
//! # let oracle = StatsOracle::new(stats, vec!["SRS".to_string()], MarginModel::new(vec![1.0], 11.0))?;
//!
//! let slots = assign_seeds(&field)?;
//! let matchups = build_first_round(&slots);
//! let best = select_top(&matchups, &oracle, &SimConfig::default())?;
//! println!("{}", best[0]);
//! # Ok(())
//! # }
//! ```

pub mod bracket;
pub mod constants;
pub mod error;
pub mod oracle;
pub mod select;
pub mod simulate;
pub mod team;

pub use bracket::{assign_seeds, build_first_round, Matchup, RegionNames, TeamSlot};
pub use constants::{DEFAULT_SEED, DEFAULT_TOP_K, DEFAULT_TRIALS, SEED_MATCHUPS};
pub use error::{BracketError, PredictionError};
pub use oracle::{MarginModel, ProbabilityOracle, StatsOracle};
pub use select::{select_top, select_top_parallel, SimConfig};
pub use simulate::{simulate_once, BracketResult, Round};
pub use team::FieldEntry;
