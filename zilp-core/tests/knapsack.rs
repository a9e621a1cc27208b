//! End-to-end tests through the HiGHS-backed relaxation oracle.

use zilp_core::{solve, Instance, Settings, Status};

#[test]
fn test_minimal_knapsack() {
    // maximize 3 x0 + 5 x1  s.t.  2 x0 + 3 x1 <= 4.
    // Both items exceed the capacity together; the second alone wins.
    let inst = Instance::parse("2 1\n3 5\n2 3 4\n").unwrap();
    let sol = solve(inst, &Settings::default()).unwrap();

    assert_eq!(sol.status, Status::Optimal);
    assert!((sol.objective - 5.0).abs() < 1e-6, "objective {}", sol.objective);
    assert!((sol.bound - sol.objective).abs() < 1e-6);
    assert_eq!(sol.assignment, vec![0.0, 1.0]);
}

#[test]
fn test_four_item_knapsack() {
    // Greedy by ratio is fractional here; the optimum takes items
    // 1, 2 and 3 for a value of 25 at full capacity.
    let inst = Instance::parse("4 1\n10 13 7 5\n3 4 2 1 7\n").unwrap();
    let sol = solve(inst, &Settings::default()).unwrap();

    assert_eq!(sol.status, Status::Optimal);
    assert!((sol.objective - 25.0).abs() < 1e-6, "objective {}", sol.objective);
    assert_eq!(sol.assignment, vec![0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_multiple_constraints() {
    // maximize 5 x0 + 4 x1 + 3 x2 under three resource rows.
    // The first row forbids all three together; x0 + x1 is the best
    // surviving combination.
    let inst = Instance::parse(
        "3 3\n\
         5 4 3\n\
         2 3 1 5\n\
         4 1 2 11\n\
         3 4 2 8\n",
    )
    .unwrap();
    let sol = solve(inst, &Settings::default()).unwrap();

    assert_eq!(sol.status, Status::Optimal);
    assert!((sol.objective - 9.0).abs() < 1e-6, "objective {}", sol.objective);
    assert_eq!(sol.assignment, vec![1.0, 1.0, 0.0]);
}

#[test]
fn test_integral_root_needs_no_tree() {
    // Per-variable capacity rows leave an integral LP optimum.
    let inst = Instance::parse("2 2\n1 1\n1 0 1\n0 1 1\n").unwrap();
    let sol = solve(inst, &Settings::default()).unwrap();

    assert_eq!(sol.status, Status::Optimal);
    assert!((sol.objective - 2.0).abs() < 1e-6);
    assert_eq!(sol.nodes_explored, 0);
}

#[test]
fn test_infeasible_root() {
    // Non-negative coefficients against a negative bound: empty region.
    let inst = Instance::parse("2 1\n1 1\n1 1 -1\n").unwrap();
    let sol = solve(inst, &Settings::default()).unwrap();

    assert_eq!(sol.status, Status::Infeasible);
    assert!(!sol.has_incumbent());
    assert_eq!(sol.nodes_explored, 0);
}

#[test]
fn test_zero_capacity_forces_empty_selection() {
    // x0 = x1 = 0 is the only feasible point; its value is 0.
    let inst = Instance::parse("2 1\n3 5\n1 1 0\n").unwrap();
    let sol = solve(inst, &Settings::default()).unwrap();

    assert_eq!(sol.status, Status::Optimal);
    assert!(sol.objective.abs() < 1e-6, "objective {}", sol.objective);
    assert_eq!(sol.assignment, vec![0.0, 0.0]);
}
