//! vl-core: shared foundation for the virtual lab crates.
//!
//! Contains:
//! - numeric (Real + tolerances + denominator guard + display formatting)
//! - constants (physical constants used by the catalog formulas)

pub mod constants;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
