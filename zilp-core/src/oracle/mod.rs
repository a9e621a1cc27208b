//! Continuous relaxation oracle.
//!
//! The search engine is solver-agnostic: it consumes relaxation results
//! through the [`RelaxationOracle`] trait, and tests inject scripted
//! oracles. The default production implementation is [`HighsOracle`].

mod highs;

pub use highs::HighsOracle;

use crate::error::BnbResult;
use crate::model::Problem;

/// An optimal point of a continuous relaxation.
#[derive(Debug, Clone, PartialEq)]
pub struct LpPoint {
    /// Achieved objective value.
    pub objective: f64,

    /// Variable assignment, one value in `[0, 1]` per variable.
    pub assignment: Vec<f64>,
}

impl LpPoint {
    /// Check whether every variable is within `tol` of 0 or of 1.
    ///
    /// An integral relaxation point is feasible for the 0/1 program and
    /// optimal for it under the current fixings.
    pub fn is_integral(&self, tol: f64) -> bool {
        self.assignment
            .iter()
            .all(|&x| x.abs() <= tol || (x - 1.0).abs() <= tol)
    }
}

/// Result of solving a problem's continuous relaxation.
#[derive(Debug, Clone, PartialEq)]
pub enum Relaxation {
    /// The relaxation has an optimum.
    Optimal(LpPoint),

    /// The feasible region is empty under the accumulated fixings.
    Infeasible,
}

/// A solver for continuous LP relaxations.
///
/// The contract: every variable is continuous with bounds `[0, 1]`, each
/// accumulated fixing becomes an equality constraint, each instance row
/// becomes a `<=` constraint, and the objective is maximized. The call
/// blocks and has no effect on the search state; the engine invokes it
/// exactly once per problem.
pub trait RelaxationOracle {
    /// Solve the continuous relaxation of `problem`.
    ///
    /// An empty feasible region is reported as `Relaxation::Infeasible`;
    /// `Err` is reserved for solver failures.
    fn solve(&self, problem: &Problem) -> BnbResult<Relaxation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_within_tolerance() {
        let point = LpPoint {
            objective: 5.0,
            assignment: vec![0.9999999, 0.0000001, 1.0],
        };
        assert!(point.is_integral(1e-6));
    }

    #[test]
    fn test_fractional_value_detected() {
        let point = LpPoint {
            objective: 6.5,
            assignment: vec![0.5, 1.0],
        };
        assert!(!point.is_integral(1e-6));
    }
}
