use super::State;

/// Regime selected by the yield check of a single step.
///
/// There is no persistent regime across steps; each step is classified by
/// the sign of its trial yield function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Trial stress inside or on the yield surface.
    Elastic,
    /// Trial stress outside the yield surface; a plastic correction was applied.
    Plastic,
}

/// Outcome of one return-mapping step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Updated state.
    pub state: State,

    /// Regime the step was resolved in.
    pub regime: Regime,

    /// Plastic multiplier increment `Δγ`.
    ///
    /// Zero for elastic steps, strictly positive for plastic ones.
    pub delta_gamma: f64,

    /// Elastic predictor `σ_prev + E·Δε`.
    pub trial_stress: f64,

    /// Consistent algorithmic tangent `dσ/dε`.
    ///
    /// `E` for elastic steps and `E·H / (E + H)` for plastic ones.
    pub tangent: f64,
}

impl Step {
    /// Updated stress.
    pub fn stress(&self) -> f64 {
        self.state.stress()
    }

    /// Returns `true` if the step produced plastic flow.
    pub fn is_plastic(&self) -> bool {
        self.regime == Regime::Plastic
    }
}
