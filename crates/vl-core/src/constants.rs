//! Physical constants (SI) shared by the catalog formulas.
//!
//! Values are the rounded ones students meet in introductory courses, not
//! CODATA precision.

use crate::Real;

pub const G0_MPS2: Real = 9.81;
pub const GRAVITATIONAL_CONSTANT: Real = 6.674e-11;
pub const SPEED_OF_LIGHT: Real = 3.0e8;
pub const PLANCK: Real = 6.626e-34;
pub const STEFAN_BOLTZMANN: Real = 5.67e-8;
pub const COULOMB: Real = 8.99e9;
pub const GAS_CONSTANT: Real = 8.314;
pub const VACUUM_PERMEABILITY: Real = 4.0e-7 * core::f64::consts::PI;
pub const WIEN_DISPLACEMENT: Real = 2.898e-3;
pub const ELECTRON_MASS: Real = 9.109e-31;
pub const ELEMENTARY_CHARGE: Real = 1.602e-19;
pub const BOLTZMANN: Real = 1.381e-23;
pub const AVOGADRO: Real = 6.022e23;

/// Reference intensity for sound levels, W/m^2.
pub const HEARING_THRESHOLD: Real = 1.0e-12;

#[inline]
pub fn deg_to_rad(deg: Real) -> Real {
    deg.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_smoke() {
        assert!((VACUUM_PERMEABILITY - 1.2566e-6).abs() < 1e-9);
        assert!((deg_to_rad(180.0) - core::f64::consts::PI).abs() < 1e-12);
    }
}
