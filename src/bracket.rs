use serde::Serialize;

use crate::constants::{FIELD_SIZE, REGION_COUNT, SEEDS_PER_REGION, SEED_MATCHUPS};
use crate::error::BracketError;
use crate::team::FieldEntry;

/// Ordered names of the four regional sub-brackets.
///
/// Order matters: odd seed lines fill regions in this order, even seed
/// lines in reverse, so position 0 receives the strongest team overall.
/// Everything downstream refers to regions by index into this array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionNames([String; REGION_COUNT]);

impl RegionNames {
    pub fn new(names: [String; REGION_COUNT]) -> Self {
        RegionNames(names)
    }

    /// Name of the region at the given bracket position.
    pub fn name(&self, region: u8) -> &str {
        &self.0[region as usize]
    }
}

impl Default for RegionNames {
    fn default() -> Self {
        RegionNames([
            "East".to_string(),
            "West".to_string(),
            "South".to_string(),
            "Midwest".to_string(),
        ])
    }
}

/// A team's place in the bracket.
///
/// Slots are created once by [`assign_seeds`] and never mutated; a full
/// field yields exactly one slot per (region, seed) pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamSlot {
    pub school: String,

    /// Seed line, 1 (best) through 16.
    pub seed: u8,

    /// Index into the tournament's [`RegionNames`].
    pub region: u8,
}

/// One scheduled game.
///
/// Through the Elite 8 both teams share `region`; for the Final Four and
/// Championship the field is `team_a`'s region and carries no pairing
/// meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct Matchup {
    pub region: u8,
    pub team_a: String,
    pub team_b: String,
}

impl Matchup {
    /// Schedule line with the region spelled out, e.g. `East: Duke vs UNC`.
    pub fn describe(&self, regions: &RegionNames) -> String {
        format!(
            "{}: {} vs {}",
            regions.name(self.region),
            self.team_a,
            self.team_b
        )
    }
}

/// Assign seeds and regions with a snake draft.
///
/// The field must be sorted by descending strength. Each consecutive
/// quartet takes the next seed line; odd lines fill regions 0..4 in order
/// and even lines in reverse, so no region collects every strongest team
/// left at a seed line. Entries past the 64th are ignored.
pub fn assign_seeds(field: &[FieldEntry]) -> Result<Vec<TeamSlot>, BracketError> {
    if field.len() < FIELD_SIZE {
        return Err(BracketError::InsufficientField { found: field.len() });
    }

    let mut slots = Vec::with_capacity(FIELD_SIZE);
    for seed in 1..=SEEDS_PER_REGION as u8 {
        let start = (seed as usize - 1) * REGION_COUNT;
        let quartet = &field[start..start + REGION_COUNT];

        for (offset, entry) in quartet.iter().enumerate() {
            let region = if seed % 2 == 1 {
                offset
            } else {
                REGION_COUNT - 1 - offset
            };
            slots.push(TeamSlot {
                school: entry.school.clone(),
                seed,
                region: region as u8,
            });
        }
    }

    Ok(slots)
}

/// Build the first-round schedule from seeded slots.
///
/// Slots are grouped into four fixed region buckets and paired by the
/// canonical seed table. A pairing whose seeds are not both present in a
/// region is skipped, so a partial field still produces a playable
/// (smaller) bracket. Output is region-major, table order within a region;
/// the simulator consumes games in exactly this order.
pub fn build_first_round(slots: &[TeamSlot]) -> Vec<Matchup> {
    let mut by_seed: [[Option<&TeamSlot>; SEEDS_PER_REGION]; REGION_COUNT] =
        [[None; SEEDS_PER_REGION]; REGION_COUNT];
    for slot in slots {
        by_seed[slot.region as usize][slot.seed as usize - 1] = Some(slot);
    }

    let mut matchups = Vec::with_capacity(slots.len() / 2);
    for (region, seeds) in by_seed.iter().enumerate() {
        for &(seed_a, seed_b) in SEED_MATCHUPS.iter() {
            let (Some(team_a), Some(team_b)) =
                (seeds[seed_a as usize - 1], seeds[seed_b as usize - 1])
            else {
                continue;
            };
            matchups.push(Matchup {
                region: region as u8,
                team_a: team_a.school.clone(),
                team_b: team_b.school.clone(),
            });
        }
    }
    matchups
}
