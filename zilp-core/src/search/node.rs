//! Search node representation.

use crate::model::Problem;
use crate::oracle::LpPoint;

/// A live node of the search tree.
///
/// A node owns its problem and the relaxation optimum produced by
/// solving it, so the relaxation is never recomputed. A node exists
/// only while queued in the frontier or during the expansion step that
/// consumes it.
#[derive(Debug, Clone)]
pub struct Node {
    /// The problem this node represents.
    pub problem: Problem,

    /// Optimum of the problem's continuous relaxation.
    pub relaxation: LpPoint,
}

impl Node {
    /// Relaxation objective, an upper bound for the whole subtree.
    pub fn objective(&self) -> f64 {
        self.relaxation.objective
    }

    /// Depth in the search tree.
    pub fn depth(&self) -> usize {
        self.problem.depth()
    }

    /// Check whether the relaxation optimum is already binary.
    pub fn is_integral(&self, tol: f64) -> bool {
        self.relaxation.is_integral(tol)
    }
}
