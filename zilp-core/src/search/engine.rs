//! Branch-and-bound engine.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{branch, select_branch_var, Frontier, Node};
use crate::error::BnbResult;
use crate::instance::Instance;
use crate::model::{Incumbent, Problem, Solution, Status};
use crate::oracle::{LpPoint, Relaxation, RelaxationOracle};
use crate::settings::Settings;

/// The top-level search loop.
///
/// Composes the frontier, branching rule, pruning and incumbent
/// tracking into a breadth-first branch-and-bound over relaxations
/// produced by an injected [`RelaxationOracle`].
pub struct BranchAndBound<O> {
    oracle: O,
    settings: Settings,
}

/// Mutable search context threaded through every expansion step.
struct SearchState {
    frontier: Frontier,
    incumbent: Incumbent,
    dual_bound: f64,
    nodes_explored: u64,
    pruned_infeasible: u64,
    pruned_bound: u64,
}

impl SearchState {
    fn new(root_bound: f64) -> Self {
        Self {
            frontier: Frontier::new(),
            incumbent: Incumbent::new(),
            dual_bound: root_bound,
            nodes_explored: 0,
            pruned_infeasible: 0,
            pruned_bound: 0,
        }
    }

    fn into_solution(self, status: Status, start: Instant) -> Solution {
        Solution {
            status,
            objective: self.incumbent.objective,
            bound: self.dual_bound,
            assignment: self.incumbent.assignment.unwrap_or_default(),
            nodes_explored: self.nodes_explored,
            pruned_infeasible: self.pruned_infeasible,
            pruned_bound: self.pruned_bound,
            incumbent_updates: self.incumbent.update_count,
            solve_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl<O: RelaxationOracle> BranchAndBound<O> {
    /// Create an engine from an oracle and settings.
    pub fn new(oracle: O, settings: Settings) -> Self {
        Self { oracle, settings }
    }

    /// Run the search to completion and return the result.
    ///
    /// The root relaxation is solved first; an integral root returns
    /// immediately without building a tree, and an infeasible root
    /// reports [`Status::Infeasible`]. Otherwise nodes are expanded in
    /// FIFO order until the frontier is exhausted or a limit fires.
    pub fn solve(&self, instance: Arc<Instance>) -> BnbResult<Solution> {
        let start = Instant::now();
        let deadline = self
            .settings
            .time_limit_ms
            .map(|ms| start + Duration::from_millis(ms));

        let root = Problem::root(instance);
        let point = match self.oracle.solve(&root)? {
            Relaxation::Infeasible => {
                log::info!("root relaxation is infeasible");
                return Ok(SearchState::new(f64::NEG_INFINITY)
                    .into_solution(Status::Infeasible, start));
            }
            Relaxation::Optimal(point) => point,
        };

        if point.is_integral(self.settings.int_feas_tol) {
            return Ok(integral_root_solution(point, start));
        }

        let mut state = SearchState::new(point.objective);
        state.frontier.push(Node {
            problem: root,
            relaxation: point,
        });

        let status = loop {
            if state.nodes_explored >= self.settings.max_nodes {
                break Status::NodeLimit;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break Status::TimeLimit;
            }
            let Some(node) = state.frontier.pop() else {
                break if state.incumbent.exists() {
                    Status::Optimal
                } else {
                    Status::Infeasible
                };
            };
            self.expand(node, &mut state)?;
        };

        if self.settings.verbose {
            log::info!(
                "search finished: status {:?} | primal {:.6} | dual {:.6} | nodes {} | enqueued {}",
                status,
                state.incumbent.objective,
                state.dual_bound,
                state.nodes_explored,
                state.frontier.total_pushed(),
            );
        }

        Ok(state.into_solution(status, start))
    }

    /// Expand one node: branch, solve both children, prune, update the
    /// incumbent, enqueue the survivors.
    fn expand(&self, node: Node, state: &mut SearchState) -> BnbResult<()> {
        let node_objective = node.objective();
        let var = select_branch_var(&node.relaxation.assignment);
        let (up, down) = branch(&node.problem, var);

        // The up child is solved and routed first, preserving insertion
        // order in the frontier.
        for child in [up, down] {
            match self.oracle.solve(&child)? {
                Relaxation::Infeasible => state.pruned_infeasible += 1,
                Relaxation::Optimal(point) => self.place(
                    Node {
                        problem: child,
                        relaxation: point,
                    },
                    state,
                ),
            }
        }

        state.nodes_explored += 1;
        state.dual_bound = state.frontier.best_bound().max(state.incumbent.objective);

        if self.settings.verbose && state.nodes_explored % self.settings.log_freq.max(1) == 0 {
            log::info!(
                "node {:>5} | relax {:.6} | dual {:.6} | primal {:.6} | frontier {}",
                state.nodes_explored,
                node_objective,
                state.dual_bound,
                state.incumbent.objective,
                state.frontier.len(),
            );
        }

        Ok(())
    }

    /// Route one live child: prune by bound, record a new incumbent, or
    /// enqueue for later expansion.
    ///
    /// The bound test compares against the live primal bound, so a
    /// sibling tied with a just-found incumbent dies here instead of
    /// being expanded to no effect. A child that passes the test and is
    /// integral therefore always improves the incumbent; integral
    /// children are terminal and never enter the frontier.
    fn place(&self, child: Node, state: &mut SearchState) {
        if child.objective() <= state.incumbent.objective {
            state.pruned_bound += 1;
            return;
        }
        if child.is_integral(self.settings.int_feas_tol) {
            if state
                .incumbent
                .update(&child.relaxation.assignment, child.objective())
            {
                let removed = state.frontier.prune_dominated(state.incumbent.objective);
                state.pruned_bound += removed as u64;
            }
        } else {
            state.frontier.push(child);
        }
    }
}

/// Result for a root whose relaxation is already binary: its objective
/// is both bounds and no node is ever expanded.
fn integral_root_solution(point: LpPoint, start: Instant) -> Solution {
    let objective = point.objective;
    Solution {
        status: Status::Optimal,
        objective,
        bound: objective,
        assignment: point.assignment.iter().map(|v| v.round()).collect(),
        nodes_explored: 0,
        pruned_infeasible: 0,
        pruned_bound: 0,
        incumbent_updates: 0,
        solve_time_ms: start.elapsed().as_millis() as u64,
    }
}
