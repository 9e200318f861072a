//! Solid mechanics models.
//!
//! This module contains constitutive models that relate strain to stress at a
//! single material point.

pub mod elastoplastic;
