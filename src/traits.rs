//! # Traits
//!
//! Sampling contract shared by every process. All randomness flows through
//! an explicitly passed generator; batch sampling derives one deterministic
//! stream seed per path so that parallel execution never changes the values
//! a given (seed, path index) pair produces.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rand_distr::StandardNormal;
use rayon::prelude::*;

/// Derive the RNG seed of stream `stream` from a master seed.
///
/// SplitMix64-style mix; streams of the same master seed are distinct and
/// reproducible independently of scheduling order.
pub fn stream_seed(master: u64, stream: u64) -> u64 {
  let a = 0x9E37_79B9_7F4A_7C15_u64;
  let b = 0xBF58_476D_1CE4_E5B9_u64;
  let mut z = master.wrapping_add(a.wrapping_mul(stream.wrapping_add(1)));
  z = (z ^ (z >> 30)).wrapping_mul(b);
  z ^ (z >> 27)
}

/// Fill an array with i.i.d. standard-normal draws from `rng`.
pub fn standard_normal_array<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Array1<f64> {
  Array1::random_using(n, StandardNormal, rng)
}

pub trait ProcessExt: Send + Sync {
  /// Draw one sample path using the given generator.
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64>;

  /// Draw `m` independent sample paths, one seeded stream per path.
  fn sample_batch(&self, m: usize, seed: u64) -> Vec<Array1<f64>> {
    (0..m)
      .into_par_iter()
      .map(|i| {
        let mut rng = StdRng::seed_from_u64(stream_seed(seed, i as u64));
        self.sample(&mut rng)
      })
      .collect()
  }
}
