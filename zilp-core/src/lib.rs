//! Branch-and-bound solver for 0/1 integer linear programs.
//!
//! A problem is a linear maximization objective over binary variables,
//! subject to linear `<=` constraints. The solver relaxes the binary
//! domains to `[0, 1]`, solves the continuous relaxation through a
//! [`RelaxationOracle`], and searches by fixing the most fractional
//! variable to 1 and to 0, pruning subtrees whose relaxation is
//! infeasible or whose bound cannot beat the incumbent.

#![warn(missing_docs)]

pub mod error;
pub mod instance;
pub mod model;
pub mod oracle;
pub mod search;
pub mod settings;

pub use error::{BnbError, BnbResult};
pub use instance::{ConstraintRow, Instance};
pub use model::{BranchValue, Fixing, Incumbent, Problem, Solution, Status};
pub use oracle::{HighsOracle, LpPoint, Relaxation, RelaxationOracle};
pub use search::{BranchAndBound, Frontier, Node};
pub use settings::Settings;

use std::sync::Arc;

/// Solve an instance with the default HiGHS-backed relaxation oracle.
pub fn solve(instance: Instance, settings: &Settings) -> BnbResult<Solution> {
    BranchAndBound::new(HighsOracle::new(), settings.clone()).solve(Arc::new(instance))
}
