//! Shared fixtures for elastoplastic tests.

use super::MaterialParameters;

/// Stress reached by a single `0.1` strain increment on [`reference`] from rest.
pub(crate) const REFERENCE_PLASTIC_STRESS: f64 = 18.991899189918996;

/// Material with `E = 1000`, `H = 111`, `Y0 = 10`.
pub(crate) fn reference() -> MaterialParameters {
    MaterialParameters::new(1000.0, 111.0, 10.0).expect("reference constants are valid")
}

/// Same as [`reference`] but without hardening.
pub(crate) fn perfectly_plastic() -> MaterialParameters {
    MaterialParameters::new(1000.0, 0.0, 10.0).expect("reference constants are valid")
}
