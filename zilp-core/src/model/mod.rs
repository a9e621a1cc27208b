//! Problem and solution types for the branch-and-bound search.

mod problem;
mod solution;

pub use problem::{BranchValue, Fixing, Problem};
pub use solution::{Incumbent, Solution, Status};
