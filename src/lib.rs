//! # Twine Plasticity
//!
//! Elastoplastic material models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Material models, each with a [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_plasticity::models::mechanics::elastoplastic::ElastoPlasticModel;
//!
//! let mut model = ElastoPlasticModel::new(1000.0, 111.0, 10.0).unwrap();
//! model.update_step(0.001, 0.0, 0.0);
//! assert!((model.sigma() - 1.0).abs() < 1e-12);
//! ```
//!
//! Note: Only utilities in [`support`] and the re-exports of each model module
//! are part of the public API. Each model's internal `core` module remains private.

pub mod models;
pub mod support;
