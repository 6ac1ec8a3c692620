//! # Covariance
//!
//! $$
//! C\in\mathbb{R}^{N\times N},\qquad C=C^\top,\qquad C\succeq 0
//! $$
//!
//! Kernel-specific builders assemble dense covariance matrices over a
//! [`TimeGrid`](crate::grid::TimeGrid). Entries are evaluated once per
//! unordered pair and mirrored, so symmetry holds bit-for-bit.

pub mod fractional;
pub mod riemann_liouville;

use nalgebra::DMatrix;

/// Assemble a symmetric matrix from a lower-triangle entry function.
///
/// `entry(i, j)` is only ever called with `j <= i`; the value is written to
/// both `(i, j)` and `(j, i)`.
pub fn from_lower_triangle<F>(n: usize, mut entry: F) -> DMatrix<f64>
where
  F: FnMut(usize, usize) -> f64,
{
  let mut c = DMatrix::<f64>::zeros(n, n);
  for i in 0..n {
    for j in 0..=i {
      let v = entry(i, j);
      c[(i, j)] = v;
      c[(j, i)] = v;
    }
  }
  c
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lower_triangle_assembly_mirrors_exactly() {
    let c = from_lower_triangle(8, |i, j| 1.0 / (1.0 + (i + 3 * j) as f64));
    for i in 0..8 {
      for j in 0..8 {
        assert_eq!(c[(i, j)].to_bits(), c[(j, i)].to_bits());
      }
    }
  }

  #[test]
  fn entry_function_only_sees_the_lower_triangle() {
    let _ = from_lower_triangle(6, |i, j| {
      assert!(j <= i, "entry called above the diagonal: ({i}, {j})");
      0.0
    });
  }
}
