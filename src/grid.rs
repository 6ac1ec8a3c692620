//! # Time grid
//!
//! $$
//! t_k=\varepsilon+\frac{k}{N-1}(T-\varepsilon),\qquad k=0,\dots,N-1
//! $$
//!
use ndarray::Array1;

use crate::error::SimulationError;

/// Linearly spaced sample times on `[start, end]` with `start > 0`.
///
/// Both covariance kernels are singular at `t = 0` (the fractional kernel
/// degenerates to zero variance, the Riemann-Liouville integrand is not
/// integrable there for small Hurst), so the grid never contains the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
  times: Array1<f64>,
}

impl TimeGrid {
  pub fn build(n: usize, start: f64, end: f64) -> Result<Self, SimulationError> {
    if n < 2 || start <= 0.0 || start >= end {
      return Err(SimulationError::InvalidGridParameters { n, start, end });
    }

    // linspace's last step can round past `end`; the grid owns its bounds
    let mut times = Array1::linspace(start, end, n);
    times[n - 1] = end;

    Ok(Self { times })
  }

  pub fn len(&self) -> usize {
    self.times.len()
  }

  pub fn is_empty(&self) -> bool {
    self.times.is_empty()
  }

  pub fn times(&self) -> &Array1<f64> {
    &self.times
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grid_spans_bounds_and_is_strictly_increasing() {
    let grid = TimeGrid::build(100, 1e-5, 10.0).unwrap();
    let t = grid.times();

    assert_eq!(grid.len(), 100);
    assert_eq!(t[0], 1e-5);
    assert_eq!(t[99], 10.0);
    for i in 1..grid.len() {
      assert!(t[i] > t[i - 1], "grid not increasing at {i}: {} <= {}", t[i], t[i - 1]);
    }
  }

  #[test]
  fn grid_rejects_invalid_parameters() {
    for (n, start, end) in [(1, 1e-5, 10.0), (100, 0.0, 10.0), (100, -1.0, 10.0), (100, 10.0, 10.0), (100, 11.0, 10.0)] {
      let err = TimeGrid::build(n, start, end).unwrap_err();
      assert_eq!(err, SimulationError::InvalidGridParameters { n, start, end });
    }
  }
}
