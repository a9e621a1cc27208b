//! Branching variable selection and child generation.

use crate::model::{BranchValue, Problem};

/// Select the branching variable: the index whose relaxed value is
/// closest to 0.5 (the least decisive variable), ties broken by the
/// lowest index.
///
/// The assignment must be non-empty; instances always carry at least
/// one variable.
pub fn select_branch_var(assignment: &[f64]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &x) in assignment.iter().enumerate() {
        let dist = (x - 0.5).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// Build the two child problems for a branching variable.
///
/// Returned in expansion order: the up child (variable fixed to 1)
/// first, then the down child (fixed to 0).
pub fn branch(parent: &Problem, var: usize) -> (Problem, Problem) {
    (
        parent.child(var, BranchValue::One),
        parent.child(var, BranchValue::Zero),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::model::Fixing;
    use std::sync::Arc;

    #[test]
    fn test_most_fractional_wins() {
        // Distances to 0.5: 0.2, 0.05, 0.4.
        assert_eq!(select_branch_var(&[0.7, 0.45, 0.9]), 1);
    }

    #[test]
    fn test_exact_half_wins_over_everything() {
        assert_eq!(select_branch_var(&[1.0, 0.5, 0.4]), 1);
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // 0.4 and 0.6 are equidistant from 0.5.
        assert_eq!(select_branch_var(&[0.4, 0.6]), 0);
        assert_eq!(select_branch_var(&[1.0, 0.6, 0.4]), 1);
    }

    #[test]
    fn test_children_fix_up_then_down() {
        let inst = Arc::new(Instance::parse("3 1\n1 2 3\n1 1 1 2\n").unwrap());
        let parent = Problem::root(inst).child(0, BranchValue::One);

        let (up, down) = branch(&parent, 2);

        assert_eq!(
            up.fixings().last(),
            Some(&Fixing { var: 2, value: BranchValue::One })
        );
        assert_eq!(
            down.fixings().last(),
            Some(&Fixing { var: 2, value: BranchValue::Zero })
        );
        assert_eq!(up.depth(), 2);
        assert_eq!(down.depth(), 2);
    }
}
