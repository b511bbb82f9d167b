//! Random right-hand-side vectors.
//!
//! By default samples come from the thread-local entropy-seeded generator, so
//! every call produces a different vector. A fixed seed gives reproducible
//! vectors for tests.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the uniform samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// Fresh entropy on every call.
    #[default]
    Entropy,
    /// Deterministic stream from the given seed.
    Seeded(u64),
}

impl RandomSource {
    /// `Seeded` when a seed is given, `Entropy` otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Seeded)
    }
}

/// Vector of `n` independent samples, uniform in [0, 1).
pub fn random_rhs(n: usize, source: RandomSource) -> DVector<f64> {
    match source {
        RandomSource::Entropy => sample(&mut rand::thread_rng(), n),
        RandomSource::Seeded(seed) => sample(&mut StdRng::seed_from_u64(seed), n),
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, n: usize) -> DVector<f64> {
    DVector::from_fn(n, |_, _| rng.gen::<f64>())
}
