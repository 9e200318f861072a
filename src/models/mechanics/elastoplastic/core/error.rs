use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building an elastoplastic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ElastoPlasticError {
    /// A material constant violates its admissible range.
    ///
    /// Young's modulus and the initial yield stress must be strictly positive;
    /// the hardening modulus must be non-negative.
    #[error("invalid {parameter}")]
    InvalidParameter {
        /// The offending material constant.
        parameter: Parameter,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

impl ElastoPlasticError {
    pub(super) fn invalid(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}

/// Identifies a material constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Elastic (Young's) modulus `E`.
    YoungModulus,
    /// Isotropic hardening modulus `H`.
    HardeningModulus,
    /// Initial yield stress `Y0`.
    YieldStress,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::YoungModulus => "Young's modulus",
            Self::HardeningModulus => "hardening modulus",
            Self::YieldStress => "initial yield stress",
        };
        f.write_str(name)
    }
}
