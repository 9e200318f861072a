//! Scalar return mapping for elastoplasticity with linear isotropic hardening.
//!
//! Each step follows the elastic-predictor / plastic-corrector scheme:
//! a trial stress is computed as if the increment were purely elastic, checked
//! against the current yield surface, and, if it lies outside, returned to the
//! expanded surface. Because hardening is linear the consistency condition is
//! linear in the plastic multiplier and solved in closed form.
//!
//! The pure update lives in [`return_map`]; [`ElastoPlasticModel`] owns a
//! single committed [`State`] and stores each step's result.

mod error;
mod loading_path;
mod model;
mod parameters;
mod return_map;
mod state;
mod step;

#[cfg(test)]
mod test_support;

pub use error::{ElastoPlasticError, Parameter};
pub use loading_path::LoadingPath;
pub use model::ElastoPlasticModel;
pub use parameters::MaterialParameters;
pub use return_map::return_map;
pub use state::State;
pub use step::{Regime, Step};
