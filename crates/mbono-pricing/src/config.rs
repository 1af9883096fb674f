//! Batch configuration.

use serde::{Deserialize, Serialize};

use mbono_core::conventions::REPRICE_TOLERANCE;
use mbono_core::{MbonoError, MbonoResult};
use mbono_math::solvers::SolverConfig;

/// Configuration for batch price-to-yield runs.
///
/// Defaults reproduce the reference behaviour: tolerance 7e-11, at most
/// 10,000 Newton steps, reprice tolerance 2e-6.
///
/// # Example
///
/// ```rust
/// use mbono_pricing::BatchConfig;
///
/// let config: BatchConfig = serde_json::from_str(r#"{"solver": {"tolerance": 1e-12}}"#).unwrap();
/// assert_eq!(config.solver.tolerance, 1e-12);
/// assert_eq!(config.solver.max_iterations, 10_000);
/// assert_eq!(config.reprice_tolerance, 2e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Newton-Raphson settings.
    pub solver: SolverConfig,

    /// Largest accepted gap between the re-priced yield and the rounded quote.
    pub reprice_tolerance: f64,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            reprice_tolerance: REPRICE_TOLERANCE,
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

impl BatchConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the Newton step tolerance.
    #[must_use]
    pub fn with_precision(mut self, tolerance: f64) -> Self {
        self.solver.tolerance = tolerance;
        self
    }

    /// Sets the reprice tolerance.
    #[must_use]
    pub fn with_reprice_tolerance(mut self, tolerance: f64) -> Self {
        self.reprice_tolerance = tolerance;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a batch of `count` bonds should be processed in parallel.
    ///
    /// Always false without the `parallel` feature.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns `MbonoError::Solver` for an unusable solver configuration and
    /// `MbonoError::InvalidConfig` for a non-positive reprice tolerance.
    pub fn validate(&self) -> MbonoResult<()> {
        self.solver.validate()?;
        if !(self.reprice_tolerance.is_finite() && self.reprice_tolerance > 0.0) {
            return Err(MbonoError::invalid_config(format!(
                "reprice_tolerance must be positive and finite, got {}",
                self.reprice_tolerance
            )));
        }
        Ok(())
    }
}
