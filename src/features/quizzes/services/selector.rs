//! Random selection of the next quiz question.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::features::questions::models::Question;

/// Pick one question from `pool` whose id is not in `previous`, uniformly at random.
///
/// Returns `None` once every question in the pool has been asked.
pub fn select_unseen<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|q| !previous.contains(&i64::from(q.id)))
        .collect();

    unseen.choose(rng).copied()
}
