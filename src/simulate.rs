use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::bracket::Matchup;
use crate::constants::{LOG_EPSILON, REGION_COUNT};
use crate::error::BracketError;
use crate::oracle::ProbabilityOracle;

/// Tournament rounds in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Round {
    #[serde(rename = "Round of 64")]
    RoundOf64,
    #[serde(rename = "Round of 32")]
    RoundOf32,
    #[serde(rename = "Sweet 16")]
    Sweet16,
    #[serde(rename = "Elite 8")]
    Elite8,
    #[serde(rename = "Final Four")]
    FinalFour,
    #[serde(rename = "Championship")]
    Championship,
}

impl Round {
    /// All rounds, first to last.
    pub const ALL: [Round; 6] = [
        Round::RoundOf64,
        Round::RoundOf32,
        Round::Sweet16,
        Round::Elite8,
        Round::FinalFour,
        Round::Championship,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Round::RoundOf64 => "Round of 64",
            Round::RoundOf32 => "Round of 32",
            Round::Sweet16 => "Sweet 16",
            Round::Elite8 => "Elite 8",
            Round::FinalFour => "Final Four",
            Round::Championship => "Championship",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one complete playout.
///
/// `rounds` is an append-only log in play order: each entry pairs a round
/// with the winners it produced, 32 at the Round of 64 halving down to the
/// single champion. Immutable once the simulation returns it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BracketResult {
    pub rounds: Vec<(Round, Vec<String>)>,

    /// Sum of ln(probability) over every realized game outcome.
    pub log_probability: f64,
}

impl BracketResult {
    /// Winners recorded for a round, if the playout reached it.
    pub fn winners(&self, round: Round) -> Option<&[String]> {
        self.rounds
            .iter()
            .find(|(r, _)| *r == round)
            .map(|(_, w)| w.as_slice())
    }

    /// The last surviving team, once a round has produced a single winner.
    pub fn champion(&self) -> Option<&str> {
        match self.rounds.last() {
            Some((_, winners)) if winners.len() == 1 => winners.first().map(String::as_str),
            _ => None,
        }
    }
}

impl fmt::Display for BracketResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (round, winners) in &self.rounds {
            writeln!(f, "{}:", round)?;
            for winner in winners {
                writeln!(f, "  - {}", winner)?;
            }
        }
        write!(f, "Log probability: {:.2}", self.log_probability)
    }
}

/// Play one full randomized bracket.
///
/// Games are processed in schedule order and randomness is drawn in that
/// same order, so a given RNG state reproduces the entire playout. The
/// oracle is queried fresh for every game. An oracle failure aborts the
/// playout with the offending matchup attached.
pub fn simulate_once<O, R>(
    first_round: &[Matchup],
    oracle: &O,
    rng: &mut R,
) -> Result<BracketResult, BracketError>
where
    O: ProbabilityOracle + ?Sized,
    R: Rng,
{
    let mut rounds: Vec<(Round, Vec<String>)> = Vec::with_capacity(Round::ALL.len());
    let mut log_probability = 0.0;
    let mut current: Vec<Matchup> = first_round.to_vec();

    for (idx, round) in Round::ALL.into_iter().enumerate() {
        let mut winners: Vec<(u8, String)> = Vec::with_capacity(current.len());
        for game in &current {
            let p = oracle
                .probability(&game.team_a, &game.team_b)
                .map_err(|source| BracketError::Prediction {
                    team_a: game.team_a.clone(),
                    team_b: game.team_b.clone(),
                    source,
                })?;

            let a_wins = rng.gen::<f64>() < p;
            let winner = if a_wins { &game.team_a } else { &game.team_b };
            log_probability += if a_wins {
                p.ln()
            } else {
                ((1.0 - p) + LOG_EPSILON).ln()
            };
            winners.push((game.region, winner.clone()));
        }

        rounds.push((round, winners.iter().map(|(_, w)| w.clone()).collect()));
        if winners.len() == 1 {
            break;
        }

        // Through the Sweet 16 winners stay inside their region; from the
        // Elite 8 on the four regional champions pair positionally.
        current = if idx < 3 {
            pair_within_regions(&winners, round)
        } else {
            pair_across_regions(&winners, round)
        };
    }

    Ok(BracketResult {
        rounds,
        log_probability,
    })
}

/// Pair consecutive same-region winners, preserving bracket-tree adjacency.
fn pair_within_regions(winners: &[(u8, String)], round: Round) -> Vec<Matchup> {
    let mut buckets: [Vec<&str>; REGION_COUNT] = Default::default();
    for (region, team) in winners {
        buckets[*region as usize].push(team.as_str());
    }

    let mut next = Vec::with_capacity(winners.len() / 2);
    for (region, teams) in buckets.iter().enumerate() {
        assert!(
            teams.len() % 2 == 0,
            "odd number of winners ({}) in region {} after the {}; first-round matchups are malformed",
            teams.len(),
            region,
            round,
        );
        for pair in teams.chunks_exact(2) {
            next.push(Matchup {
                region: region as u8,
                team_a: pair[0].to_string(),
                team_b: pair[1].to_string(),
            });
        }
    }
    next
}

/// Pair winners positionally, ignoring region.
fn pair_across_regions(winners: &[(u8, String)], round: Round) -> Vec<Matchup> {
    assert!(
        winners.len() % 2 == 0,
        "odd number of winners ({}) after the {}; first-round matchups are malformed",
        winners.len(),
        round,
    );
    winners
        .chunks_exact(2)
        .map(|pair| Matchup {
            region: pair[0].0,
            team_a: pair[0].1.clone(),
            team_b: pair[1].1.clone(),
        })
        .collect()
}
