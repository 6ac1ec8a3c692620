//! # Stats
//!
//! $$
//! \hat H=\frac{1}{2\ln 2}\ln\frac{s_1}{s_2}
//! $$
//!
pub mod hurst;
