use std::collections::HashMap;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{BracketError, PredictionError};

/// Pairwise win-probability source.
///
/// Implementations must be stateless: the simulator queries them fresh for
/// every game of every playout, and the parallel selector shares one
/// instance across threads.
pub trait ProbabilityOracle: Sync {
    /// Probability that `team_a` beats `team_b`, in (0, 1).
    fn probability(&self, team_a: &str, team_b: &str) -> Result<f64, PredictionError>;
}

/// Linear margin model over a difference-encoded feature vector.
///
/// The predicted scoring margin is the dot product of the weights with
/// (team A features - team B features); a standard normal CDF scaled by
/// `stddev` converts the margin to a win probability.
#[derive(Clone, Debug)]
pub struct MarginModel {
    weights: Vec<f64>,
    stddev: f64,
}

impl MarginModel {
    pub fn new(weights: Vec<f64>, stddev: f64) -> Self {
        MarginModel { weights, stddev }
    }

    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    /// Win probability for the given feature difference vector.
    pub fn predict(&self, diff: &[f64]) -> f64 {
        let margin: f64 = self.weights.iter().zip(diff).map(|(w, x)| w * x).sum();

        let normal = Normal::new(0.0, 1.0).unwrap();
        normal.cdf(margin / self.stddev)
    }
}

/// Oracle backed by per-team statistics tables and a [`MarginModel`].
///
/// The feature schema (ordered column names) is fixed at construction and
/// validated against the model's weight count once, not per call. Columns a
/// team is missing read as 0.0 so partial statistics still score; only a
/// school with no statistics row at all fails a prediction.
#[derive(Debug)]
pub struct StatsOracle {
    stats: HashMap<String, HashMap<String, f64>>,
    schema: Vec<String>,
    model: MarginModel,
}

impl StatsOracle {
    pub fn new(
        stats: HashMap<String, HashMap<String, f64>>,
        schema: Vec<String>,
        model: MarginModel,
    ) -> Result<Self, BracketError> {
        if model.weight_count() != schema.len() {
            return Err(BracketError::SchemaMismatch {
                expected: model.weight_count(),
                found: schema.len(),
            });
        }
        Ok(StatsOracle {
            stats,
            schema,
            model,
        })
    }

    /// Feature vector for a school, aligned to the schema.
    fn features(&self, school: &str) -> Result<Vec<f64>, PredictionError> {
        let row = self
            .stats
            .get(school)
            .ok_or_else(|| PredictionError::UnknownTeam(school.to_string()))?;
        Ok(self
            .schema
            .iter()
            .map(|col| row.get(col).copied().unwrap_or(0.0))
            .collect())
    }
}

impl ProbabilityOracle for StatsOracle {
    fn probability(&self, team_a: &str, team_b: &str) -> Result<f64, PredictionError> {
        let a = self.features(team_a)?;
        let b = self.features(team_b)?;
        let diff: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x - y).collect();
        Ok(self.model.predict(&diff))
    }
}
