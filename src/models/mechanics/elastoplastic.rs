//! Elastoplastic material point with linear isotropic hardening.
//!
//! Two entry points share the same return-mapping core:
//!
//! - [`ElastoPlasticModel`] owns one committed state and advances it in place.
//! - [`ReturnMapping`] is a stateless [`twine_core::Model`]: the caller passes
//!   the prior state with each [`Increment`] and keeps the returned [`Step`].

mod core;

pub use self::core::{
    ElastoPlasticError, ElastoPlasticModel, LoadingPath, MaterialParameters, Parameter, Regime,
    State, Step, return_map,
};

use std::convert::Infallible;

use twine_core::Model;

/// A strain increment applied to an explicit prior state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Increment {
    /// State to update from.
    pub state: State,

    /// Strain increment `Δε`.
    pub delta_strain: f64,
}

/// Stateless [`Model`] adapter around [`return_map`].
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_plasticity::models::mechanics::elastoplastic::{
///     Increment, MaterialParameters, ReturnMapping, State,
/// };
///
/// let params = MaterialParameters::new(1000.0, 111.0, 10.0).unwrap();
/// let model = ReturnMapping::new(params);
///
/// let step = model
///     .call(&Increment { state: State::default(), delta_strain: 0.001 })
///     .unwrap();
/// assert!((step.stress() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnMapping {
    params: MaterialParameters,
}

impl ReturnMapping {
    /// Creates an adapter for the given material.
    pub fn new(params: MaterialParameters) -> Self {
        Self { params }
    }

    /// Material constants.
    pub fn parameters(&self) -> &MaterialParameters {
        &self.params
    }
}

impl Model for ReturnMapping {
    type Input = Increment;
    type Output = Step;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(return_map(&self.params, &input.state, input.delta_strain))
    }
}
