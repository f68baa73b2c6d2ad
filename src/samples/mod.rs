//! Sample record generation.
//!
//! Each generator returns [`RECORDS_PER_KIND`] records: the hand-written
//! canonical samples first, then derived variants.  A variant clones the
//! canonical sample at `index % CANONICAL_COUNT`, appends a numbered suffix to
//! its title and re-draws a few scalar fields from fixed candidate lists using
//! the supplied random source.

pub mod poems;
pub mod recipes;

pub use poems::generate_poems;
pub use recipes::generate_recipes;

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of records produced per document kind.
pub const RECORDS_PER_KIND: usize = 15;

/// Number of hand-written samples at the start of each record list.
pub const CANONICAL_COUNT: usize = 5;

/// 1-based variant number used in the title suffix for record `index`.
pub(crate) fn variant_number(index: usize) -> usize {
    index + 1 - CANONICAL_COUNT
}

/// Picks one candidate uniformly.  Candidate lists are fixed and never empty.
pub(crate) fn pick<'a, T, R>(rng: &mut R, candidates: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    candidates
        .choose(rng)
        .unwrap_or_else(|| unreachable!("candidate lists are never empty"))
}
