//! # Hurst estimator
//!
//! $$
//! \hat H=\frac{1}{2\ln 2}\ln\frac{\sum_i(X_i-2X_{i-2}+X_{i-4})^2}{\sum_i(X_i-2X_{i-1}+X_{i-2})^2}
//! $$
//!
//! Quadratic-variation ratio of second differences at lags 2 and 1. Purely
//! diagnostic: a batch generated with Hurst parameter `H` should produce
//! offsets `\hat H - H` centered near zero.

use std::f64::consts::LN_2;

use ndarray::Array1;

use crate::error::SimulationError;

/// Mean and spread of `\hat H - H` across one batch of paths.
///
/// Degenerate paths are counted and excluded from the aggregate instead of
/// corrupting it with infinities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HurstSummary {
  pub mean: f64,
  pub std_dev: f64,
  /// Paths that contributed to the aggregate.
  pub used: usize,
  /// Paths rejected as degenerate.
  pub degenerate: usize,
}

/// Estimate the self-similarity exponent of one path.
///
/// Requires at least 5 points and a path whose second differences are not
/// identically zero.
pub fn estimate_exponent(path: &Array1<f64>) -> Result<f64, SimulationError> {
  let n = path.len();
  if n < 5 {
    return Err(SimulationError::DegenerateEstimate(format!(
      "path too short for second differences: {n} < 5"
    )));
  }

  let s1: f64 = (4..n)
    .map(|i| {
      let d = path[i] - 2.0 * path[i - 2] + path[i - 4];
      d * d
    })
    .sum();
  let s2: f64 = (2..n)
    .map(|i| {
      let d = path[i] - 2.0 * path[i - 1] + path[i - 2];
      d * d
    })
    .sum();

  if s2 == 0.0 || s1 == 0.0 {
    return Err(SimulationError::DegenerateEstimate(format!(
      "vanishing quadratic variation: s1={s1}, s2={s2}"
    )));
  }

  Ok((s1 / s2).ln() / (2.0 * LN_2))
}

/// Estimate `\hat H - hurst` for one path.
pub fn estimate_offset(path: &Array1<f64>, hurst: f64) -> Result<f64, SimulationError> {
  Ok(estimate_exponent(path)? - hurst)
}

/// Aggregate offsets across a batch.
///
/// Fails only when every path in the batch is degenerate; otherwise the
/// degenerate paths are excluded and counted in the summary.
pub fn summarize_offsets(paths: &[Array1<f64>], hurst: f64) -> Result<HurstSummary, SimulationError> {
  let mut offsets = Vec::with_capacity(paths.len());
  let mut degenerate = 0_usize;

  for path in paths {
    match estimate_offset(path, hurst) {
      Ok(offset) => offsets.push(offset),
      Err(_) => degenerate += 1,
    }
  }

  if offsets.is_empty() {
    return Err(SimulationError::DegenerateEstimate(format!(
      "no usable path in a batch of {}",
      paths.len()
    )));
  }

  let used = offsets.len();
  let mean = offsets.iter().sum::<f64>() / used as f64;
  let var = offsets
    .iter()
    .map(|x| {
      let d = *x - mean;
      d * d
    })
    .sum::<f64>()
    / used as f64;

  Ok(HurstSummary {
    mean,
    std_dev: var.sqrt(),
    used,
    degenerate,
  })
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;
  use crate::traits::standard_normal_array;

  #[test]
  fn short_path_is_degenerate() {
    let path = Array1::from(vec![0.0, 1.0, 0.5, 1.5]);
    assert!(matches!(
      estimate_exponent(&path),
      Err(SimulationError::DegenerateEstimate(_))
    ));
  }

  #[test]
  fn flat_path_is_degenerate() {
    let path = Array1::from_elem(64, 3.0);
    assert!(matches!(
      estimate_offset(&path, 0.5),
      Err(SimulationError::DegenerateEstimate(_))
    ));
  }

  #[test]
  fn linear_path_is_degenerate() {
    // second differences of an affine path vanish identically
    let path = Array1::from_iter((0..64).map(|i| 0.5 + 2.0 * i as f64));
    assert!(matches!(
      estimate_exponent(&path),
      Err(SimulationError::DegenerateEstimate(_))
    ));
  }

  #[test]
  fn degenerate_paths_are_excluded_from_the_aggregate() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut paths: Vec<Array1<f64>> = (0..10).map(|_| standard_normal_array(128, &mut rng)).collect();
    paths.push(Array1::zeros(128));
    paths.push(Array1::from(vec![0.0, 1.0]));

    let summary = summarize_offsets(&paths, 0.5).unwrap();
    assert_eq!(summary.used, 10);
    assert_eq!(summary.degenerate, 2);
    assert!(summary.mean.is_finite());
    assert!(summary.std_dev.is_finite());
  }

  #[test]
  fn all_degenerate_batch_is_an_error() {
    let paths = vec![Array1::zeros(32), Array1::from_elem(32, 1.0)];
    assert!(matches!(
      summarize_offsets(&paths, 0.5),
      Err(SimulationError::DegenerateEstimate(_))
    ));
  }

  #[test]
  fn white_noise_exponent_is_near_zero() {
    // i.i.d. noise is the H -> 0 limit of the ratio, so the exponent of a
    // noise "path" should sit close to 0 on average.
    let mut rng = StdRng::seed_from_u64(11);
    let m = 500_usize;
    let mut sum = 0.0;
    for _ in 0..m {
      let path = standard_normal_array(256, &mut rng);
      sum += estimate_exponent(&path).unwrap();
    }
    let mean = sum / m as f64;
    assert!(mean.abs() < 0.05, "white-noise exponent not near zero: {mean}");
  }
}
