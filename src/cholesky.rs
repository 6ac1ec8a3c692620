//! # Cholesky
//!
//! $$
//! M=LL^\top,\qquad L\ \text{lower triangular}
//! $$
//!
//! Factorization is delegated to `nalgebra`; the factor is kept as packed
//! lower-triangle rows so that projecting a noise vector touches exactly the
//! nonzero entries.

use nalgebra::DMatrix;
use ndarray::Array1;
use tracing::debug;

use crate::error::SimulationError;

/// Packed lower-triangular Cholesky factor, row `i` holding `i + 1` entries.
#[derive(Clone, Debug)]
pub struct CholeskyFactor {
  rows: Vec<Vec<f64>>,
}

impl CholeskyFactor {
  fn from_lower(l: &DMatrix<f64>) -> Self {
    let mut rows = Vec::with_capacity(l.nrows());
    for i in 0..l.nrows() {
      let mut row = vec![0.0_f64; i + 1];
      for (j, entry) in row.iter_mut().enumerate() {
        *entry = l[(i, j)];
      }
      rows.push(row);
    }

    Self { rows }
  }

  pub fn dim(&self) -> usize {
    self.rows.len()
  }

  /// Correlate a noise vector: `L · z`.
  pub fn project(&self, z: &Array1<f64>) -> Array1<f64> {
    let mut out = Array1::<f64>::zeros(self.dim());
    for (i, row) in self.rows.iter().enumerate() {
      let mut acc = 0.0;
      for (j, lij) in row.iter().enumerate() {
        acc += lij * z[j];
      }
      out[i] = acc;
    }
    out
  }

  /// Rebuild `L · Lᵗ`, used to verify reconstruction of the input matrix.
  pub fn reconstruct(&self) -> DMatrix<f64> {
    let n = self.dim();
    let mut l = DMatrix::<f64>::zeros(n, n);
    for (i, row) in self.rows.iter().enumerate() {
      for (j, lij) in row.iter().enumerate() {
        l[(i, j)] = *lij;
      }
    }
    &l * l.transpose()
  }
}

/// Factor a symmetric positive-definite matrix.
pub fn factorize(covariance: &DMatrix<f64>) -> Result<CholeskyFactor, SimulationError> {
  covariance
    .clone()
    .cholesky()
    .map(|chol| CholeskyFactor::from_lower(&chol.l()))
    .ok_or_else(|| {
      debug!(n = covariance.nrows(), "Cholesky factorization failed");
      SimulationError::NotPositiveDefinite
    })
}

/// Factor with an explicit diagonal-jitter retry policy.
///
/// Opt-in recovery for borderline matrices: each failed attempt adds
/// `jitter` to every diagonal entry and multiplies `jitter` by ten. Returns
/// the factor together with the total jitter applied, so callers can report
/// how much the matrix was perturbed. The plain [`factorize`] never jitters.
pub fn factorize_regularized(
  covariance: &DMatrix<f64>,
  mut jitter: f64,
  attempts: usize,
) -> Result<(CholeskyFactor, f64), SimulationError> {
  let mut sigma = covariance.clone();
  let mut applied = 0.0;

  for _ in 0..attempts {
    if let Some(chol) = sigma.clone().cholesky() {
      if applied > 0.0 {
        debug!(applied, "factorization recovered with diagonal jitter");
      }
      return Ok((CholeskyFactor::from_lower(&chol.l()), applied));
    }
    for i in 0..sigma.nrows() {
      sigma[(i, i)] += jitter;
    }
    applied += jitter;
    jitter *= 10.0;
  }

  Err(SimulationError::NotPositiveDefinite)
}
