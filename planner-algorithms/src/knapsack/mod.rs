pub mod fractional;
pub mod zero_one;

use planner_structs::{Capacity, Item, PlannerResult, Selection, SolveMode};
use tracing::debug;

pub fn solve(mode: SolveMode, items: &[Item], capacity: Capacity) -> Selection {
    debug!(%mode, num_items = items.len(), %capacity, "solving");
    let selection = match mode {
        SolveMode::ZeroOne => zero_one::solve(items, capacity),
        SolveMode::Fractional => fractional::solve(items, capacity),
    };
    debug!(
        picks = selection.len(),
        total_value = selection.total_value(),
        "solved"
    );
    selection
}

/// Validates raw user input and solves.
///
/// The capacity is checked before the mode, and nothing is solved unless
/// both are valid.
pub fn solve_input(
    items: &[Item],
    capacity: &str,
    mode: &str,
    max_capacity: u32,
) -> PlannerResult<Selection> {
    let capacity = Capacity::parse(capacity, max_capacity)?;
    let mode = mode.parse::<SolveMode>()?;
    Ok(solve(mode, items, capacity))
}
