use tracing::{debug, trace};

use super::{ElastoPlasticError, LoadingPath, MaterialParameters, Regime, State, Step, return_map};

/// One-dimensional elastoplastic material point with linear isotropic hardening.
///
/// Holds fixed [`MaterialParameters`] and exactly one committed [`State`].
/// Every step is computed by [`return_map`] and then stored.
///
/// Instances share nothing, so one instance per material point can be
/// updated in parallel without synchronization.
///
/// # Example
///
/// ```
/// use twine_plasticity::models::mechanics::elastoplastic::ElastoPlasticModel;
///
/// let mut model = ElastoPlasticModel::new(1000.0, 111.0, 10.0).unwrap();
/// let step = model.update_step(0.1, 0.0, 0.0);
///
/// assert!(step.is_plastic());
/// assert!((model.sigma() - 18.991899189918996).abs() < 1e-12);
/// assert!(model.alpha() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElastoPlasticModel {
    params: MaterialParameters,
    state: State,
}

impl ElastoPlasticModel {
    /// Creates a model in the virgin state from raw material constants.
    ///
    /// # Errors
    ///
    /// Returns [`ElastoPlasticError::InvalidParameter`] if `young <= 0`,
    /// `hardening < 0`, or `yield_stress <= 0`.
    pub fn new(young: f64, hardening: f64, yield_stress: f64) -> Result<Self, ElastoPlasticError> {
        MaterialParameters::new(young, hardening, yield_stress).map(Self::with_parameters)
    }

    /// Creates a model in the virgin state from validated constants.
    pub fn with_parameters(params: MaterialParameters) -> Self {
        Self {
            params,
            state: State::default(),
        }
    }

    /// Applies `delta_epsilon` starting from the given strain and stress.
    ///
    /// The stored hardening variable is used as the starting `alpha`.
    /// The resulting state is committed.
    pub fn update_step(&mut self, delta_epsilon: f64, epsilon_prev: f64, sigma_prev: f64) -> Step {
        let prior = self.state.with_strain_and_stress(epsilon_prev, sigma_prev);
        self.commit(return_map(&self.params, &prior, delta_epsilon))
    }

    /// Applies `delta_epsilon` starting from the stored state.
    pub fn step(&mut self, delta_epsilon: f64) -> Step {
        self.commit(return_map(&self.params, &self.state, delta_epsilon))
    }

    /// Applies every increment of `path` in order, returning each step.
    pub fn follow(&mut self, path: &LoadingPath) -> Vec<Step> {
        path.deltas().iter().map(|&delta| self.step(delta)).collect()
    }

    /// Current stress.
    pub fn sigma(&self) -> f64 {
        self.state.stress()
    }

    /// Current total strain.
    pub fn epsilon(&self) -> f64 {
        self.state.strain()
    }

    /// Current accumulated plastic strain.
    pub fn alpha(&self) -> f64 {
        self.state.alpha()
    }

    /// Current committed state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Material constants.
    pub fn parameters(&self) -> &MaterialParameters {
        &self.params
    }

    fn commit(&mut self, step: Step) -> Step {
        match step.regime {
            Regime::Plastic => debug!(
                delta_gamma = step.delta_gamma,
                stress = step.stress(),
                alpha = step.state.alpha(),
                "plastic step"
            ),
            Regime::Elastic => trace!(stress = step.stress(), "elastic step"),
        }
        self.state = step.state;
        step
    }
}
