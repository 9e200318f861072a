use uom::si::{f64::Pressure, pressure::pascal};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{ElastoPlasticError, Parameter};

/// Immutable material constants of a linear isotropic hardening material.
///
/// Values are plain numbers in any consistent unit system. The
/// [`MaterialParameters::from_quantities`] constructor accepts [`uom`]
/// pressures and stores them in pascals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParameters {
    young: Constrained<f64, StrictlyPositive>,
    hardening: Constrained<f64, NonNegative>,
    yield_stress: Constrained<f64, StrictlyPositive>,
}

impl MaterialParameters {
    /// Validates and bundles the material constants.
    ///
    /// # Errors
    ///
    /// Returns [`ElastoPlasticError::InvalidParameter`] if `young <= 0`,
    /// `hardening < 0`, `yield_stress <= 0`, or any value is `NaN`.
    /// Constants are checked in argument order and the first violation is reported.
    pub fn new(young: f64, hardening: f64, yield_stress: f64) -> Result<Self, ElastoPlasticError> {
        Ok(Self {
            young: StrictlyPositive::new(young)
                .map_err(ElastoPlasticError::invalid(Parameter::YoungModulus))?,
            hardening: NonNegative::new(hardening)
                .map_err(ElastoPlasticError::invalid(Parameter::HardeningModulus))?,
            yield_stress: StrictlyPositive::new(yield_stress)
                .map_err(ElastoPlasticError::invalid(Parameter::YieldStress))?,
        })
    }

    /// Validates unit-aware material constants, storing them in pascals.
    ///
    /// # Errors
    ///
    /// Same as [`MaterialParameters::new`].
    pub fn from_quantities(
        young: Pressure,
        hardening: Pressure,
        yield_stress: Pressure,
    ) -> Result<Self, ElastoPlasticError> {
        Self::new(
            young.get::<pascal>(),
            hardening.get::<pascal>(),
            yield_stress.get::<pascal>(),
        )
    }

    /// Elastic (Young's) modulus `E`.
    pub fn young_modulus(&self) -> f64 {
        *self.young.as_ref()
    }

    /// Isotropic hardening modulus `H`.
    pub fn hardening_modulus(&self) -> f64 {
        *self.hardening.as_ref()
    }

    /// Initial yield stress `Y0`.
    pub fn initial_yield_stress(&self) -> f64 {
        *self.yield_stress.as_ref()
    }

    /// Current yield stress `Y0 + H·alpha` for an accumulated plastic strain `alpha`.
    ///
    /// Always `Y0` for a perfectly plastic material, even for infinite `alpha`.
    pub fn yield_stress(&self, alpha: f64) -> f64 {
        if self.is_perfectly_plastic() {
            return self.initial_yield_stress();
        }
        self.initial_yield_stress() + self.hardening_modulus() * alpha
    }

    /// Returns `true` if the material does not harden (`H = 0`).
    pub fn is_perfectly_plastic(&self) -> bool {
        self.hardening_modulus() == 0.0
    }
}
