use planner_algorithms::{generate_items, solve, solve_input};
use planner_structs::{repository::default_items, Capacity, PlannerError, SolveMode};

#[test]
fn test_solve_dispatches_by_mode() {
    let items = default_items();
    let exact = solve(SolveMode::ZeroOne, &items, Capacity::from(20));
    let relaxed = solve(SolveMode::Fractional, &items, Capacity::from(20));
    assert_eq!(exact.mode, SolveMode::ZeroOne);
    assert_eq!(relaxed.mode, SolveMode::Fractional);
    assert!(relaxed.total_value() >= exact.total_value());
}

#[test]
fn test_default_items() {
    // Food + First Aid Kits + Tents + Flashlights: weight 33, value 190
    let items = default_items();
    let selection = solve(SolveMode::ZeroOne, &items, Capacity::from(33));
    assert_eq!(selection.indices(), vec![0, 5, 6, 7]);
    assert_eq!(selection.total_weight(), 33);
    assert_eq!(selection.total_value(), 190.0);
}

#[test]
fn test_solve_input() {
    let items = default_items();
    let selection = solve_input(&items, "18", "Fractional", 1000).unwrap();
    assert_eq!(selection.mode, SolveMode::Fractional);
    assert_eq!(selection.capacity, Capacity::from(18));
}

#[test]
fn test_solve_input_errors() {
    let items = default_items();
    assert_eq!(
        solve_input(&items, "-1", "01", 1000),
        Err(PlannerError::NegativeCapacity { capacity: -1 })
    );
    assert_eq!(
        solve_input(&items, "-1", "bogus", 1000),
        Err(PlannerError::NegativeCapacity { capacity: -1 })
    );
    assert_eq!(
        solve_input(&items, "18", "0/1", 1000),
        Err(PlannerError::InvalidMode {
            input: "0/1".to_string()
        })
    );
    assert_eq!(
        solve_input(&items, "5000", "01", 1000),
        Err(PlannerError::CapacityTooLarge {
            capacity: 5000,
            max: 1000
        })
    );
}

#[test]
fn test_generate_items_is_reproducible() {
    let a = generate_items(99, 20, 10, 100);
    let b = generate_items(99, 20, 10, 100);
    assert_eq!(a, b);
    assert_eq!(a.len(), 20);
    assert_eq!(a[3].name, "item-3");
    assert!(a.iter().all(|i| (1..=10).contains(&i.weight) && i.value <= 100.0));
    assert_ne!(a, generate_items(100, 20, 10, 100));
}
