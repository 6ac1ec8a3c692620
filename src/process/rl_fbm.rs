//! # RL-fBM
//!
//! $$
//! X_t=\int_0^t(t-s)^{H-1/2}\,dW_s
//! $$
//!
use nalgebra::DMatrix;
use ndarray::Array1;
use rand::Rng;

use crate::cholesky;
use crate::cholesky::CholeskyFactor;
use crate::covariance::riemann_liouville::QuadratureReport;
use crate::covariance::riemann_liouville::RiemannLiouvilleKernel;
use crate::error::SimulationError;
use crate::grid::TimeGrid;
use crate::traits::standard_normal_array;
use crate::traits::ProcessExt;

/// Riemann-Liouville fractional Brownian motion through the Cholesky route.
///
/// Unlike [`Fbm`](crate::process::fbm::Fbm), every covariance entry is an
/// adaptive quadrature call, so construction dominates the cost of a unit of
/// work. The quadrature report produced during assembly stays attached to
/// the process for downstream inspection.
pub struct RlFbm {
  /// Hurst parameter (`0 < H < 1`).
  pub hurst: f64,
  covariance: DMatrix<f64>,
  factor: CholeskyFactor,
  report: QuadratureReport,
}

impl RlFbm {
  pub fn new(hurst: f64, grid: &TimeGrid) -> Result<Self, SimulationError> {
    let kernel = RiemannLiouvilleKernel::new(hurst)?;
    Self::from_kernel(kernel, grid)
  }

  /// Construct with an explicit quadrature tolerance (accuracy/speed knob).
  pub fn with_tolerance(hurst: f64, grid: &TimeGrid, tolerance: f64) -> Result<Self, SimulationError> {
    let kernel = RiemannLiouvilleKernel::with_tolerance(hurst, tolerance)?;
    Self::from_kernel(kernel, grid)
  }

  fn from_kernel(kernel: RiemannLiouvilleKernel, grid: &TimeGrid) -> Result<Self, SimulationError> {
    let (covariance, report) = kernel.covariance(grid);
    let factor = cholesky::factorize(&covariance)?;

    Ok(Self {
      hurst: kernel.hurst,
      covariance,
      factor,
      report,
    })
  }

  /// The generating covariance matrix, kept for diagnostics.
  pub fn covariance(&self) -> &DMatrix<f64> {
    &self.covariance
  }

  /// Convergence diagnostics from kernel assembly.
  pub fn quadrature_report(&self) -> QuadratureReport {
    self.report
  }

  pub fn n(&self) -> usize {
    self.factor.dim()
  }
}

impl ProcessExt for RlFbm {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
    let z = standard_normal_array(self.n(), rng);
    let mut x = self.factor.project(&z);
    x[0] = 0.0;
    x
  }
}
