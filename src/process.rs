//! # Processes
//!
//! $$
//! X=LZ,\qquad Z\sim\mathcal N(0,I)
//! $$
//!
//! | Module     | Description                                                      |
//! |------------|------------------------------------------------------------------|
//! | [`bm`]     | Standard Brownian motion via prefix-summed increments.           |
//! | [`fbm`]    | Fractional Brownian motion through the Cholesky route.           |
//! | [`rl_fbm`] | Riemann-Liouville fractional Brownian motion, quadrature kernel. |

pub mod bm;
pub mod fbm;
pub mod rl_fbm;
