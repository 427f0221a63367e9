//! Random question selection for the quiz endpoint.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Question;

/// Drops every candidate whose id was already asked.
pub fn exclude_previous(candidates: Vec<Question>, previous: &[i64]) -> Vec<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    candidates.into_iter().filter(|q| !seen.contains(&q.id)).collect()
}

/// Uniform pick among the questions not in `previous`. `None` means the quiz is over.
pub fn pick_with<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let remaining = exclude_previous(candidates, previous);
    remaining.choose(rng).cloned()
}

pub fn pick(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    pick_with(candidates, previous, &mut rand::thread_rng())
}
