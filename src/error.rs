//! # Errors
//!
//! Named failure conditions for grid construction, factorization and
//! estimation. Factorization failures are scoped to a single
//! (family, Hurst) unit of work and never abort sibling units.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
  /// Grid parameters rejected before any computation.
  #[error("invalid grid parameters: n={n}, start={start}, end={end}")]
  InvalidGridParameters { n: usize, start: f64, end: f64 },

  /// Hurst parameter outside the open interval (0, 1).
  #[error("Hurst parameter must lie in (0, 1), got {0}")]
  InvalidHurst(f64),

  /// Covariance matrix failed Cholesky factorization.
  #[error("covariance matrix is not positive definite")]
  NotPositiveDefinite,

  /// Hurst estimate undefined for this path.
  #[error("degenerate Hurst estimate: {0}")]
  DegenerateEstimate(String),
}
