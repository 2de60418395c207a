use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Produces the order in which a working set is presented
pub trait Shuffle {
    /// Permutes `indices` in place
    fn shuffle_indices(&mut self, indices: &mut [usize]);

    /// Returns a permuted copy of `items`
    fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T>
    where
        Self: Sized,
    {
        shuffled_with(self, items)
    }
}

/// Object-safe counterpart of [`Shuffle::shuffled`]
pub fn shuffled_with<T: Clone>(shuffler: &mut dyn Shuffle, items: &[T]) -> Vec<T> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    shuffler.shuffle_indices(&mut indices);
    indices.into_iter().map(|i| items[i].clone()).collect()
}

/// Uniform random permutation (Fisher-Yates via `SliceRandom`)
pub struct RandomShuffle {
    rng: StdRng,
}

impl RandomShuffle {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffle for RandomShuffle {
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut self.rng);
    }
}

/// Leaves the working set in its source order
pub struct KeepOrder;

impl Shuffle for KeepOrder {
    fn shuffle_indices(&mut self, _indices: &mut [usize]) {}
}
