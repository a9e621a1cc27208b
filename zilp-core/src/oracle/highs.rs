//! HiGHS-backed relaxation oracle via good_lp.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};

use super::{LpPoint, Relaxation, RelaxationOracle};
use crate::error::{BnbError, BnbResult};
use crate::model::Problem;

/// Relaxation oracle backed by the open-source HiGHS solver.
#[derive(Debug, Default, Clone)]
pub struct HighsOracle;

impl HighsOracle {
    /// Create a new oracle.
    pub fn new() -> Self {
        Self
    }
}

impl RelaxationOracle for HighsOracle {
    fn solve(&self, problem: &Problem) -> BnbResult<Relaxation> {
        let inst = problem.instance();

        let mut vars = variables!();
        let xs: Vec<_> = (0..inst.num_vars)
            .map(|_| vars.add(variable().min(0.0).max(1.0)))
            .collect();

        let objective: Expression = xs
            .iter()
            .zip(&inst.objective)
            .map(|(x, &c)| c * *x)
            .sum();

        let mut model = vars.maximise(&objective).using(highs);

        for row in &inst.constraints {
            let lhs: Expression = xs
                .iter()
                .zip(&row.coefficients)
                .map(|(x, &a)| a * *x)
                .sum();
            model = model.with(constraint!(lhs <= row.rhs));
        }

        for fixing in problem.fixings() {
            model = model.with(constraint!(xs[fixing.var] == fixing.value.as_f64()));
        }

        match model.solve() {
            Ok(solution) => {
                let assignment: Vec<f64> = xs.iter().map(|x| solution.value(*x)).collect();
                let objective = assignment
                    .iter()
                    .zip(&inst.objective)
                    .map(|(x, c)| x * c)
                    .sum();
                Ok(Relaxation::Optimal(LpPoint {
                    objective,
                    assignment,
                }))
            }
            Err(ResolutionError::Infeasible) => Ok(Relaxation::Infeasible),
            // The [0, 1] box keeps every relaxation bounded, so anything
            // else is a solver fault.
            Err(err) => Err(BnbError::Oracle(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::model::BranchValue;
    use std::sync::Arc;

    fn knapsack() -> Arc<Instance> {
        // maximize 3 x0 + 5 x1  s.t.  2 x0 + 3 x1 <= 4
        Arc::new(Instance::parse("2 1\n3 5\n2 3 4\n").unwrap())
    }

    #[test]
    fn test_root_relaxation() {
        let root = Problem::root(knapsack());
        let relax = HighsOracle::new().solve(&root).unwrap();

        // LP optimum: x1 = 1, x0 = 1/2, objective 6.5.
        match relax {
            Relaxation::Optimal(point) => {
                assert!((point.objective - 6.5).abs() < 1e-6);
                assert!((point.assignment[0] - 0.5).abs() < 1e-6);
                assert!((point.assignment[1] - 1.0).abs() < 1e-6);
            }
            Relaxation::Infeasible => panic!("root relaxation should be feasible"),
        }
    }

    #[test]
    fn test_fixing_becomes_equality() {
        let root = Problem::root(knapsack());
        let child = root.child(0, BranchValue::One);
        let relax = HighsOracle::new().solve(&child).unwrap();

        // With x0 = 1: 3 x1 <= 2, so x1 = 2/3 and objective 3 + 10/3.
        match relax {
            Relaxation::Optimal(point) => {
                assert!((point.assignment[0] - 1.0).abs() < 1e-6);
                assert!((point.assignment[1] - 2.0 / 3.0).abs() < 1e-6);
                assert!((point.objective - (3.0 + 10.0 / 3.0)).abs() < 1e-6);
            }
            Relaxation::Infeasible => panic!("fixed relaxation should be feasible"),
        }
    }

    #[test]
    fn test_empty_region_is_infeasible() {
        // x0 + x1 <= -1 has no point in the [0, 1] box.
        let inst = Arc::new(Instance::parse("2 1\n1 1\n1 1 -1\n").unwrap());
        let relax = HighsOracle::new().solve(&Problem::root(inst)).unwrap();
        assert_eq!(relax, Relaxation::Infeasible);
    }

    #[test]
    fn test_conflicting_fixings_are_infeasible() {
        let inst = Arc::new(Instance::parse("2 1\n1 1\n1 1 1\n").unwrap());
        let problem = Problem::root(inst)
            .child(0, BranchValue::One)
            .child(1, BranchValue::One);
        let relax = HighsOracle::new().solve(&problem).unwrap();
        assert_eq!(relax, Relaxation::Infeasible);
    }
}
