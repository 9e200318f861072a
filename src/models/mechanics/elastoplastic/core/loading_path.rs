use std::num::NonZeroUsize;

/// A strain-driven loading history made of successive strain increments.
///
/// Strains are measured from the start of the path, so the same path can be
/// applied to a model in any state.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use twine_plasticity::models::mechanics::elastoplastic::LoadingPath;
///
/// let n = NonZeroUsize::new(10).unwrap();
/// let path = LoadingPath::new().to(0.05, n).to(-0.05, n).to(0.0, n);
///
/// assert_eq!(path.len(), 30);
/// assert_eq!(path.end_strain(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingPath {
    deltas: Vec<f64>,
    end_strain: f64,
}

impl LoadingPath {
    /// Creates an empty path starting at zero strain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `steps` equal increments taking the path to `target`.
    #[must_use]
    pub fn to(mut self, target: f64, steps: NonZeroUsize) -> Self {
        let n = steps.get();
        let delta = (target - self.end_strain) / n as f64;
        self.deltas.extend(std::iter::repeat_n(delta, n));
        self.end_strain = target;
        self
    }

    /// Appends a single raw increment.
    #[must_use]
    pub fn increment(mut self, delta: f64) -> Self {
        self.deltas.push(delta);
        self.end_strain += delta;
        self
    }

    /// Strain increments in application order.
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    /// Strain at the end of the path, relative to its start.
    pub fn end_strain(&self) -> f64 {
        self.end_strain
    }

    /// Number of increments.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Returns `true` if the path has no increments.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}
