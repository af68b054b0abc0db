use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::error::{Result, SampleError};

/// Builds the random source for a draw; the same seed reproduces the same draw.
pub fn build_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// The set of pair positions selected for extraction, held in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleIndex {
    positions: Vec<usize>,
}
impl SampleIndex {
    /// Draws `num_pairs` distinct positions uniformly without replacement from `[0, total_pairs)`.
    pub fn draw<R: Rng + ?Sized>(
        rng: &mut R,
        total_pairs: usize,
        num_pairs: usize,
    ) -> Result<Self> {
        if num_pairs > total_pairs {
            return Err(SampleError::OversizedSample {
                requested: num_pairs,
                available: total_pairs,
            });
        }
        let positions = rand::seq::index::sample(rng, total_pairs, num_pairs).into_vec();
        Ok(Self::from_positions(positions))
    }

    /// Builds an index from known positions, sorting and removing duplicates
    pub fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }
}
