use uom::si::{f64::Pressure, pressure::pascal};

use crate::support::constraint::{Constrained, NonNegative};

use super::MaterialParameters;

/// Committed state of a material point.
///
/// The accumulated plastic strain `alpha` is the hardening variable; it is
/// never negative. [`State::default`] is the virgin state `(0, 0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    strain: f64,
    stress: f64,
    alpha: f64,
}

impl State {
    /// Creates a state from externally known values.
    pub fn new(strain: f64, stress: f64, alpha: Constrained<f64, NonNegative>) -> Self {
        Self::from_parts(strain, stress, alpha.into_inner())
    }

    /// Builds a state whose `alpha` is already known to be non-negative.
    pub(super) fn from_parts(strain: f64, stress: f64, alpha: f64) -> Self {
        Self {
            strain,
            stress,
            alpha,
        }
    }

    /// Total strain.
    pub fn strain(&self) -> f64 {
        self.strain
    }

    /// Stress.
    pub fn stress(&self) -> f64 {
        self.stress
    }

    /// Accumulated equivalent plastic strain.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Stress as a pressure, interpreting the stored value in pascals.
    pub fn stress_quantity(&self) -> Pressure {
        Pressure::new::<pascal>(self.stress)
    }

    /// Yield function `|σ| - (Y0 + H·alpha)`.
    ///
    /// Non-positive for every state committed by a return-mapping step.
    pub fn yield_function(&self, params: &MaterialParameters) -> f64 {
        self.stress.abs() - params.yield_stress(self.alpha)
    }

    /// Replaces strain and stress while keeping the hardening history.
    #[must_use]
    pub(super) fn with_strain_and_stress(self, strain: f64, stress: f64) -> Self {
        Self {
            strain,
            stress,
            ..self
        }
    }
}
