use thiserror::Error;

use crate::constants::FIELD_SIZE;

/// Reasons the probability oracle can fail to score a matchup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PredictionError {
    /// No statistics row exists for the named school.
    #[error("no statistics for team {0:?}")]
    UnknownTeam(String),
}

/// Errors surfaced by bracket construction and simulation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BracketError {
    /// The ranked field is too small to seed a full bracket.
    #[error("field must contain at least {FIELD_SIZE} teams, got {found}")]
    InsufficientField { found: usize },

    /// The match model's weight vector does not line up with the declared
    /// feature schema. Raised once, at oracle construction.
    #[error("model expects {expected} features but schema declares {found}")]
    SchemaMismatch { expected: usize, found: usize },

    /// The oracle could not score a matchup. Fatal to the playout that hit
    /// it, and to the whole batch under the selector's abort policy.
    #[error("failed to score {team_a:?} vs {team_b:?}: {source}")]
    Prediction {
        team_a: String,
        team_b: String,
        source: PredictionError,
    },
}
