//! # fractional-rs
//!
//! Gaussian sample-path generation for Brownian motion, fractional Brownian
//! motion and its Riemann-Liouville variant, with an empirical check of the
//! generated self-similarity exponent.
//!
//! The pipeline is covariance-driven: a time grid parametrizes a symmetric
//! positive-semidefinite covariance matrix, a Cholesky factor of that matrix
//! turns independent standard-normal noise into correlated paths, and a
//! quadratic-variation ratio estimator validates the Hurst parameter the
//! batch was generated with. Standard Brownian motion skips the matrix
//! machinery entirely and prefix-sums its increments.
//!
//! ## Modules
//!
//! | Module         | Description                                                       |
//! |----------------|-------------------------------------------------------------------|
//! | [`grid`]       | Strictly positive, linearly spaced sample times.                  |
//! | [`covariance`] | Kernel-specific covariance assembly over a grid.                  |
//! | [`cholesky`]   | Dense factorization and noise projection.                         |
//! | [`process`]    | The three samplable processes.                                    |
//! | [`stats`]      | Quadratic-variation Hurst estimation.                             |
//! | [`simulation`] | Timed, parallel (family, Hurst) units of work.                    |
//! | [`traits`]     | Sampling contract and deterministic seed streams.                 |
//! | [`error`]      | Named failure conditions.                                         |
//!
//! ## Example Usage
//!
//! ```rust
//! use fractional_rs::grid::TimeGrid;
//! use fractional_rs::process::fbm::Fbm;
//! use fractional_rs::traits::ProcessExt;
//!
//! let grid = TimeGrid::build(200, 1e-5, 10.0).unwrap();
//! let fbm = Fbm::new(0.3, &grid).unwrap();
//! let paths = fbm.sample_batch(1000, 42);
//! ```
//!
//! ## Parallelism
//!
//! Batch sampling and study execution use `rayon`. Every path derives its
//! own RNG stream from the master seed, so parallel runs reproduce the
//! sequential values exactly.

pub mod cholesky;
pub mod covariance;
pub mod error;
pub mod grid;
pub mod process;
pub mod simulation;
pub mod stats;
pub mod traits;
