//! # fBM
//!
//! $$
//! \mathbb E[B_t^H B_s^H]=\tfrac12\left(t^{2H}+s^{2H}-|t-s|^{2H}\right)
//! $$
//!
use nalgebra::DMatrix;
use ndarray::Array1;
use rand::Rng;

use crate::cholesky;
use crate::cholesky::CholeskyFactor;
use crate::covariance::fractional::FractionalKernel;
use crate::error::SimulationError;
use crate::grid::TimeGrid;
use crate::traits::standard_normal_array;
use crate::traits::ProcessExt;

/// Fractional Brownian motion sampled through the Cholesky route.
///
/// Construction assembles the covariance matrix over the grid and factors it
/// once; every subsequent draw is a single lower-triangular projection of
/// fresh standard-normal noise, with the first point pinned to zero.
#[derive(Debug)]
pub struct Fbm {
  /// Hurst parameter (`0 < H < 1`) controlling roughness and memory.
  pub hurst: f64,
  covariance: DMatrix<f64>,
  factor: CholeskyFactor,
}

impl Fbm {
  pub fn new(hurst: f64, grid: &TimeGrid) -> Result<Self, SimulationError> {
    let kernel = FractionalKernel::new(hurst)?;
    let covariance = kernel.covariance(grid);
    let factor = cholesky::factorize(&covariance)?;

    Ok(Self {
      hurst,
      covariance,
      factor,
    })
  }

  /// The generating covariance matrix, kept for diagnostics.
  pub fn covariance(&self) -> &DMatrix<f64> {
    &self.covariance
  }

  pub fn n(&self) -> usize {
    self.factor.dim()
  }
}

impl ProcessExt for Fbm {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
    let z = standard_normal_array(self.n(), rng);
    let mut x = self.factor.project(&z);
    // covariance at the first grid point is the zero reference
    x[0] = 0.0;
    x
  }
}
