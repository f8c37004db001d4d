//! Weighted and uniform preset selection

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Weighted;

/// Pick a candidate with probability proportional to its rarity.
///
/// The roll is drawn from `[0, sum + 1)`, so one unit of weight past the
/// last candidate selects nothing. Candidates are walked in order and the
/// first one whose cumulative rarity exceeds the roll wins; a zero-rarity
/// candidate can never be picked. Returns `None` for an empty slice or a
/// roll in the extra unit, both meaning "nothing generated".
pub fn select_weighted<'a, T: Weighted>(candidates: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }

    let total: u64 = candidates.iter().map(|c| u64::from(c.rarity())).sum::<u64>() + 1;
    let mut choice = rng.gen_range(0..total) as i64;

    for candidate in candidates {
        choice -= i64::from(candidate.rarity());
        if choice < 0 {
            return Some(candidate);
        }
    }
    None
}

/// Pick any candidate with equal probability
pub fn select_uniform<'a, T>(candidates: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    candidates.choose(rng)
}
