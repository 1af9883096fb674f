//! Newton-Raphson root-finding algorithm.

use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// and stops as soon as `|x_{n+1} - x_n| < config.tolerance`, returning
/// `x_{n+1}`. If `config.max_iterations` steps pass without meeting the
/// tolerance, the last estimate is returned with `converged == false`.
///
/// The derivative is not guarded: a zero or vanishing derivative yields a
/// non-finite estimate, which the caller is expected to detect.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use mbono_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default());
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(f: F, df: DF, initial_guess: f64, config: &SolverConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut step = f64::INFINITY;

    for iteration in 0..config.max_iterations {
        let next = x - f(x) / df(x);
        step = (next - x).abs();
        x = next;

        if step < config.tolerance {
            log::trace!("newton converged after {} iterations", iteration + 1);
            return SolverResult {
                root: x,
                iterations: iteration + 1,
                last_step: step,
                converged: true,
            };
        }
    }

    log::debug!(
        "newton hit the {} iteration cap (last step {:.3e})",
        config.max_iterations,
        step
    );

    SolverResult {
        root: x,
        iterations: config.max_iterations,
        last_step: step,
        converged: false,
    }
}
