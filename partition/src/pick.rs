//! Random choice among valid partitions.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one option uniformly at random. `None` for an empty slice.
pub fn pick_random<'a, T, R>(options: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    options.choose(rng)
}
