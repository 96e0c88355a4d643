//! Greedy fractional knapsack.
//!
//! Items are taken whole in descending value/weight order until one no
//! longer fits; that item is then taken in part and the scan stops.

use planner_structs::{Capacity, Item, Pick, Selection, SolveMode};
use std::ops::ControlFlow;

pub fn solve(items: &[Item], capacity: Capacity) -> Selection {
    let picks = match ratio_order(items).into_iter().try_fold(
        (Vec::new(), capacity.get()),
        |(mut picks, remaining), index| {
            let item = &items[index];
            if item.weight <= remaining {
                picks.push(Pick::full(index, item));
                ControlFlow::Continue((picks, remaining - item.weight))
            } else {
                if remaining > 0 {
                    picks.push(Pick::partial(index, item, remaining));
                }
                ControlFlow::Break(picks)
            }
        },
    ) {
        ControlFlow::Continue((picks, _)) => picks,
        ControlFlow::Break(picks) => picks,
    };
    Selection::new(SolveMode::Fractional, capacity, picks)
}

/// Item positions sorted by ratio, highest first.
///
/// The sort is stable, so items with equal ratios keep their list order.
/// Zero-weight items have an infinite ratio and come first.
pub fn ratio_order(items: &[Item]) -> Vec<usize> {
    let mut sorted_items: Vec<usize> = (0..items.len()).collect();
    sorted_items.sort_by(|&a, &b| items[b].ratio().total_cmp(&items[a].ratio()));
    sorted_items
}
