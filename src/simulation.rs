//! # Simulation
//!
//! $$
//! (\text{grid},H,m,\text{seed})\mapsto(\text{paths},C,\hat H)
//! $$
//!
//! A unit of work is one (process family, Hurst) pair: grid build, covariance
//! assembly, factorization, batch sampling and estimation, run to completion
//! and timed as a whole. Units are independent, so a study over a list of
//! Hurst values maps them in parallel; a failed unit never aborts a sibling.

use std::time::Duration;
use std::time::Instant;

use nalgebra::DMatrix;
use ndarray::Array1;
use rayon::prelude::*;
use tracing::debug;
use tracing::warn;

use crate::covariance::riemann_liouville::QuadratureReport;
use crate::covariance::riemann_liouville::DEFAULT_TOLERANCE;
use crate::error::SimulationError;
use crate::grid::TimeGrid;
use crate::process::bm::Bm;
use crate::process::fbm::Fbm;
use crate::process::rl_fbm::RlFbm;
use crate::stats::hurst::summarize_offsets;
use crate::stats::hurst::HurstSummary;
use crate::traits::stream_seed;
use crate::traits::ProcessExt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessFamily {
  /// Prefix-summed independent increments, no covariance setup.
  BrownianMotion,
  /// Fractional Brownian motion, closed-form kernel.
  Fractional,
  /// Riemann-Liouville fractional Brownian motion, quadrature kernel.
  RiemannLiouville,
}

impl ProcessFamily {
  pub fn name(&self) -> &'static str {
    match self {
      Self::BrownianMotion => "bm",
      Self::Fractional => "fbm",
      Self::RiemannLiouville => "rl-fbm",
    }
  }
}

/// Shared inputs of every unit in a study.
#[derive(Clone, Copy, Debug)]
pub struct StudyConfig {
  /// Grid size.
  pub n: usize,
  /// First grid point, strictly positive.
  pub start: f64,
  /// Last grid point.
  pub end: f64,
  /// Paths per unit.
  pub batch_size: usize,
  /// Absolute tolerance of the Riemann-Liouville quadrature.
  pub tolerance: f64,
  /// Master seed; every unit and path derives its own stream from it.
  pub seed: u64,
}

impl StudyConfig {
  pub fn new(n: usize, start: f64, end: f64, batch_size: usize, seed: u64) -> Self {
    Self {
      n,
      start,
      end,
      batch_size,
      tolerance: DEFAULT_TOLERANCE,
      seed,
    }
  }

  #[must_use]
  pub fn with_tolerance(mut self, tolerance: f64) -> Self {
    self.tolerance = tolerance;
    self
  }
}

/// Everything one unit of work hands to the reporting layer.
///
/// The covariance matrix rides along for the two fractional families so a
/// collaborator can inspect the generator; Brownian motion has none.
#[derive(Clone, Debug)]
pub struct UnitReport {
  pub family: ProcessFamily,
  pub hurst: f64,
  pub paths: Vec<Array1<f64>>,
  pub covariance: Option<DMatrix<f64>>,
  pub quadrature: Option<QuadratureReport>,
  /// None when every path in the batch was degenerate.
  pub estimate: Option<HurstSummary>,
  pub elapsed: Duration,
}

/// One study entry: the unit identity plus its outcome.
#[derive(Clone, Debug)]
pub struct UnitOutcome {
  pub family: ProcessFamily,
  pub hurst: f64,
  pub result: Result<UnitReport, SimulationError>,
}

/// Run one (family, Hurst) unit to completion.
///
/// Pure given its inputs: the same (config, family, hurst, seed) always
/// yields the same paths, regardless of scheduling.
pub fn run_unit(
  config: &StudyConfig,
  family: ProcessFamily,
  hurst: f64,
  seed: u64,
) -> Result<UnitReport, SimulationError> {
  let started = Instant::now();
  let grid = TimeGrid::build(config.n, config.start, config.end)?;

  let (paths, covariance, quadrature) = match family {
    ProcessFamily::BrownianMotion => {
      let bm = Bm::new(config.n);
      (bm.sample_batch(config.batch_size, seed), None, None)
    }
    ProcessFamily::Fractional => {
      let fbm = Fbm::new(hurst, &grid)?;
      let paths = fbm.sample_batch(config.batch_size, seed);
      (paths, Some(fbm.covariance().clone()), None)
    }
    ProcessFamily::RiemannLiouville => {
      let rl = RlFbm::with_tolerance(hurst, &grid, config.tolerance)?;
      let report = rl.quadrature_report();
      if !report.converged {
        warn!(
          family = family.name(),
          hurst,
          flagged = report.flagged_entries,
          max_error = report.max_error_estimate,
          "quadrature tolerance missed on some covariance entries"
        );
      }
      let paths = rl.sample_batch(config.batch_size, seed);
      (paths, Some(rl.covariance().clone()), Some(report))
    }
  };

  let estimate = match summarize_offsets(&paths, hurst) {
    Ok(summary) => Some(summary),
    Err(err) => {
      warn!(family = family.name(), hurst, %err, "Hurst estimate undefined for the whole batch");
      None
    }
  };

  let elapsed = started.elapsed();
  debug!(family = family.name(), hurst, ?elapsed, "unit of work finished");

  Ok(UnitReport {
    family,
    hurst,
    paths,
    covariance,
    quadrature,
    estimate,
    elapsed,
  })
}

/// Run a full study: one Brownian unit plus one fractional and one
/// Riemann-Liouville unit per Hurst value.
///
/// Units are mapped in parallel. Each gets a deterministic stream seed
/// derived from the master seed and its position, so the values a unit
/// observes never depend on thread scheduling. Per-unit failures are
/// reported in place, sibling units still complete.
pub fn run_study(config: &StudyConfig, hursts: &[f64]) -> Vec<UnitOutcome> {
  let mut units = vec![(ProcessFamily::BrownianMotion, 0.5)];
  units.extend(hursts.iter().map(|&h| (ProcessFamily::Fractional, h)));
  units.extend(hursts.iter().map(|&h| (ProcessFamily::RiemannLiouville, h)));

  units
    .into_par_iter()
    .enumerate()
    .map(|(i, (family, hurst))| UnitOutcome {
      family,
      hurst,
      result: run_unit(config, family, hurst, stream_seed(config.seed, i as u64)),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use tracing_test::traced_test;

  use super::*;

  #[test]
  fn unit_is_reproducible_for_a_fixed_seed() {
    let config = StudyConfig::new(32, 1e-4, 1.0, 8, 3);
    let a = run_unit(&config, ProcessFamily::Fractional, 0.7, 99).unwrap();
    let b = run_unit(&config, ProcessFamily::Fractional, 0.7, 99).unwrap();

    assert_eq!(a.paths, b.paths);
    for path in &a.paths {
      assert_eq!(path[0], 0.0);
      assert_eq!(path.len(), 32);
    }
  }

  #[test]
  fn brownian_unit_skips_the_covariance_machinery() {
    let config = StudyConfig::new(64, 1e-4, 1.0, 4, 1);
    let report = run_unit(&config, ProcessFamily::BrownianMotion, 0.5, 7).unwrap();

    assert!(report.covariance.is_none());
    assert!(report.quadrature.is_none());
    assert_eq!(report.paths.len(), 4);
  }

  #[test]
  fn fractional_units_attach_their_covariance() {
    let config = StudyConfig::new(16, 1e-3, 1.0, 2, 1).with_tolerance(1e-6);
    let fbm = run_unit(&config, ProcessFamily::Fractional, 0.4, 7).unwrap();
    let rl = run_unit(&config, ProcessFamily::RiemannLiouville, 0.4, 7).unwrap();

    assert!(fbm.covariance.is_some());
    assert!(fbm.quadrature.is_none());
    assert!(rl.covariance.is_some());
    assert!(rl.quadrature.is_some());
    assert_eq!(rl.quadrature.unwrap().entries, 16 * 17 / 2);
  }

  #[test]
  fn invalid_grid_is_rejected_before_any_computation() {
    let config = StudyConfig::new(1, 1e-4, 1.0, 4, 1);
    let err = run_unit(&config, ProcessFamily::BrownianMotion, 0.5, 7).unwrap_err();
    assert_eq!(
      err,
      SimulationError::InvalidGridParameters {
        n: 1,
        start: 1e-4,
        end: 1.0
      }
    );
  }

  #[test]
  fn study_reports_every_unit_and_scopes_failures() {
    let config = StudyConfig::new(16, 1e-3, 1.0, 4, 5).with_tolerance(1e-6);
    // 1.5 is invalid, its two fractional units must fail without
    // taking the rest of the study down
    let outcomes = run_study(&config, &[0.3, 1.5]);

    assert_eq!(outcomes.len(), 5);
    let failed: Vec<_> = outcomes.iter().filter(|o| o.result.is_err()).collect();
    assert_eq!(failed.len(), 2);
    for outcome in &failed {
      assert_eq!(outcome.hurst, 1.5);
      assert_eq!(
        outcome.result.as_ref().unwrap_err(),
        &SimulationError::InvalidHurst(1.5)
      );
    }
    for outcome in outcomes.iter().filter(|o| o.result.is_ok()) {
      let report = outcome.result.as_ref().unwrap();
      assert_eq!(report.paths.len(), 4);
      assert!(report.estimate.is_some());
    }
  }

  #[test]
  fn study_is_deterministic_across_runs() {
    let config = StudyConfig::new(16, 1e-3, 1.0, 3, 21).with_tolerance(1e-6);
    let a = run_study(&config, &[0.4, 0.7]);
    let b = run_study(&config, &[0.4, 0.7]);

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
      assert_eq!(
        x.result.as_ref().unwrap().paths,
        y.result.as_ref().unwrap().paths
      );
    }
  }

  #[traced_test]
  #[test]
  fn finished_units_are_logged() {
    let config = StudyConfig::new(16, 1e-3, 1.0, 2, 1);
    run_unit(&config, ProcessFamily::BrownianMotion, 0.5, 7).unwrap();
    assert!(logs_contain("unit of work finished"));
  }
}
