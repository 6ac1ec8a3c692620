//! # Brownian motion
//!
//! $$
//! W_0=0,\qquad W_i=W_{i-1}+Z_i,\qquad Z_i\sim\mathcal N(0,1)
//! $$
//!
use ndarray::Array1;
use rand::Rng;

use crate::traits::standard_normal_array;
use crate::traits::ProcessExt;

/// Standard Brownian motion built by prefix-summing independent increments.
///
/// This path deliberately bypasses the covariance machinery: there is no
/// matrix to assemble or factor, so construction is O(1) and sampling O(N).
pub struct Bm {
  /// Number of discrete points in the generated path.
  pub n: usize,
}

impl Bm {
  #[must_use]
  pub fn new(n: usize) -> Self {
    assert!(n >= 2, "n must be at least 2");

    Self { n }
  }
}

impl ProcessExt for Bm {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
    let z = standard_normal_array(self.n - 1, rng);
    let mut w = Array1::<f64>::zeros(self.n);

    for i in 1..self.n {
      w[i] = w[i - 1] + z[i - 1];
    }

    w
  }
}
