use super::{MaterialParameters, Regime, State, Step};

/// Advances `prior` by the strain increment `delta_strain`.
///
/// Elastic predictor, then plastic corrector when the trial stress leaves the
/// yield surface `|σ| = Y0 + H·alpha`:
///
/// ```text
/// σ_trial = σ_prev + E·Δε
/// f_trial = |σ_trial| - (Y0 + H·alpha)
/// Δγ      = f_trial / (E + H)                 (only if f_trial > 0)
/// alpha  += Δγ
/// σ_new   = σ_trial - sign(σ_trial)·E·Δγ = sign(σ_trial)·(Y0 + H·alpha)
/// ```
///
/// The corrected stress is evaluated on the updated yield surface, so it stays
/// defined when `E·Δε` overflows to infinity: `alpha` becomes infinite and the
/// stress is `±Y0` for `H = 0`, `±∞` otherwise.
///
/// The function is total: it performs no validation on its inputs and never
/// fails. A `NaN` trial stress is not considered yielding and passes through
/// the elastic branch.
///
/// # Example
///
/// ```
/// use twine_plasticity::models::mechanics::elastoplastic::{
///     MaterialParameters, Regime, State, return_map,
/// };
///
/// let params = MaterialParameters::new(1000.0, 111.0, 10.0).unwrap();
/// let step = return_map(&params, &State::default(), 0.1);
///
/// assert_eq!(step.regime, Regime::Plastic);
/// assert!((step.stress() - 18.991899189918996).abs() < 1e-12);
/// ```
pub fn return_map(params: &MaterialParameters, prior: &State, delta_strain: f64) -> Step {
    let young = params.young_modulus();
    let hardening = params.hardening_modulus();

    let strain = prior.strain() + delta_strain;
    let alpha = prior.alpha();
    let trial_stress = prior.stress() + young * delta_strain;
    let f_trial = trial_stress.abs() - params.yield_stress(alpha);

    if f_trial > 0.0 {
        let delta_gamma = f_trial / (young + hardening);
        let alpha = alpha + delta_gamma;
        let stress = trial_stress.signum() * params.yield_stress(alpha);

        Step {
            state: State::from_parts(strain, stress, alpha),
            regime: Regime::Plastic,
            delta_gamma,
            trial_stress,
            tangent: young * hardening / (young + hardening),
        }
    } else {
        Step {
            state: State::from_parts(strain, trial_stress, alpha),
            regime: Regime::Elastic,
            delta_gamma: 0.0,
            trial_stress,
            tangent: young,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::mechanics::elastoplastic::core::test_support::{
        REFERENCE_PLASTIC_STRESS, perfectly_plastic, reference,
    };
    use crate::support::constraint::NonNegative;

    fn at(strain: f64, stress: f64, alpha: f64) -> State {
        State::new(strain, stress, NonNegative::new(alpha).unwrap())
    }

    #[test]
    fn small_increment_is_elastic() {
        let step = return_map(&reference(), &State::default(), 0.001);

        assert_eq!(step.regime, Regime::Elastic);
        assert_relative_eq!(step.stress(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(step.state.strain(), 0.001);
        assert_eq!(step.state.alpha(), 0.0);
        assert_eq!(step.delta_gamma, 0.0);
        assert_eq!(step.tangent, 1000.0);
    }

    #[test]
    fn large_increment_is_plastic() {
        let step = return_map(&reference(), &State::default(), 0.1);

        assert_eq!(step.regime, Regime::Plastic);
        assert_relative_eq!(step.trial_stress, 100.0);
        assert_relative_eq!(step.stress(), REFERENCE_PLASTIC_STRESS, epsilon = 1e-12);
        assert_relative_eq!(step.delta_gamma, 90.0 / 1111.0, epsilon = 1e-15);
        assert_relative_eq!(step.state.alpha(), 90.0 / 1111.0, epsilon = 1e-15);
        assert_relative_eq!(step.state.strain(), 0.1);
        assert_relative_eq!(step.tangent, 111_000.0 / 1111.0);
    }

    #[test]
    fn compression_mirrors_tension() {
        let params = reference();
        let tension = return_map(&params, &State::default(), 0.1);
        let compression = return_map(&params, &State::default(), -0.1);

        assert_relative_eq!(compression.stress(), -REFERENCE_PLASTIC_STRESS, epsilon = 1e-12);
        assert_eq!(compression.stress(), -tension.stress());
        assert_eq!(compression.state.alpha(), tension.state.alpha());
    }

    #[test]
    fn elastic_steps_are_exact_and_keep_alpha() {
        let params = reference();
        let cases = [
            (0.0, 0.0, 0.0, 0.005),
            (0.01, 5.0, 0.0, -0.012),
            (0.3, -12.0, 0.2, 0.01),
            (-0.1, 30.0, 0.5, -0.08),
            (0.0, 0.0, 0.0, 0.0),
        ];

        for (strain, stress, alpha, delta) in cases {
            let prior = at(strain, stress, alpha);
            let step = return_map(&params, &prior, delta);

            assert_eq!(step.regime, Regime::Elastic, "case {prior:?} + {delta}");
            assert_relative_eq!(step.stress(), stress + 1000.0 * delta, epsilon = 1e-12);
            assert_relative_eq!(step.state.strain(), strain + delta, epsilon = 1e-15);
            assert_eq!(step.state.alpha(), alpha);
        }
    }

    #[test]
    fn plastic_steps_land_on_updated_surface() {
        let params = reference();
        let cases = [
            (0.0, 0.0, 0.0, 0.02),
            (0.0, 0.0, 0.0, -3.0),
            (0.1, 18.0, 0.08, 0.05),
            (0.2, -25.0, 0.1, -0.5),
            (0.0, 40.0, 0.0, 0.0),
        ];

        for (strain, stress, alpha, delta) in cases {
            let prior = at(strain, stress, alpha);
            let step = return_map(&params, &prior, delta);

            assert!(step.is_plastic(), "case {prior:?} + {delta}");
            assert!(step.delta_gamma > 0.0);
            assert_relative_eq!(step.state.alpha(), alpha + step.delta_gamma);
            assert_relative_eq!(
                step.stress().abs(),
                params.yield_stress(step.state.alpha()),
                epsilon = 1e-10
            );
            assert_eq!(step.stress().signum(), step.trial_stress.signum());
        }
    }

    #[test]
    fn on_surface_trial_is_elastic() {
        let params = reference();
        let step = return_map(&params, &State::default(), 0.01);

        assert_eq!(step.trial_stress, 10.0);
        assert_eq!(step.regime, Regime::Elastic);
        assert_eq!(step.stress(), 10.0);
    }

    #[test]
    fn perfect_plasticity_returns_to_initial_yield() {
        let params = perfectly_plastic();

        for delta in [0.011, 0.5, -0.02, -7.0] {
            let step = return_map(&params, &at(0.0, 0.0, 0.3), delta);
            assert!(step.is_plastic());
            assert_relative_eq!(step.stress().abs(), 10.0, epsilon = 1e-12);
            assert_eq!(step.tangent, 0.0);
        }
    }

    #[test]
    fn unloading_after_flow_is_elastic_until_reverse_yield() {
        let params = reference();
        let loaded = return_map(&params, &State::default(), 0.1).state;
        let surface = params.yield_stress(loaded.alpha());

        // Full unload and partial reversal stay inside |σ| <= Y0 + H·alpha.
        let unload = return_map(&params, &loaded, -0.03);
        assert_eq!(unload.regime, Regime::Elastic);
        assert_relative_eq!(unload.stress(), loaded.stress() - 30.0, epsilon = 1e-12);

        // Reverse yielding begins at -surface, not at -Y0.
        let reverse = return_map(&params, &loaded, -0.05);
        assert!(reverse.is_plastic());
        assert_relative_eq!(
            reverse.stress(),
            -params.yield_stress(reverse.state.alpha()),
            epsilon = 1e-12
        );
        assert!(reverse.stress().abs() > surface);
    }

    #[test]
    fn overflowing_trial_stays_on_surface() {
        let step = return_map(&perfectly_plastic(), &State::default(), 1e306);
        assert!(step.trial_stress.is_infinite());
        assert_eq!(step.state.alpha(), f64::INFINITY);
        assert_eq!(step.stress(), 10.0);

        let step = return_map(&reference(), &State::default(), -1e306);
        assert!(step.is_plastic());
        assert_eq!(step.stress(), f64::NEG_INFINITY);
        assert_eq!(step.state.alpha(), f64::INFINITY);
    }

    #[test]
    fn nan_increment_passes_through() {
        let step = return_map(&reference(), &State::default(), f64::NAN);
        assert_eq!(step.regime, Regime::Elastic);
        assert!(step.stress().is_nan());
        assert_eq!(step.state.alpha(), 0.0);
    }
}
