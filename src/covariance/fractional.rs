//! # Fractional kernel
//!
//! $$
//! C_{ij}=\tfrac12\left(t_i^{2H}+t_j^{2H}-|t_i-t_j|^{2H}\right)
//! $$
//!
use nalgebra::DMatrix;

use crate::covariance::from_lower_triangle;
use crate::error::SimulationError;
use crate::grid::TimeGrid;

/// Covariance kernel of fractional Brownian motion with Hurst parameter `H`.
///
/// `H = 0.5` recovers standard Brownian motion, `min(t_i, t_j)`.
#[derive(Debug)]
pub struct FractionalKernel {
  pub hurst: f64,
}

impl FractionalKernel {
  pub fn new(hurst: f64) -> Result<Self, SimulationError> {
    if !(0.0 < hurst && hurst < 1.0) {
      return Err(SimulationError::InvalidHurst(hurst));
    }

    Ok(Self { hurst })
  }

  pub fn evaluate(&self, ti: f64, tj: f64) -> f64 {
    let h2 = 2.0 * self.hurst;
    0.5 * (ti.powf(h2) + tj.powf(h2) - (ti - tj).abs().powf(h2))
  }

  /// Assemble the full covariance matrix over `grid`.
  ///
  /// O(N²) kernel evaluations, one per unordered pair.
  pub fn covariance(&self, grid: &TimeGrid) -> DMatrix<f64> {
    let t = grid.times();
    from_lower_triangle(grid.len(), |i, j| self.evaluate(t[i], t[j]))
  }
}
