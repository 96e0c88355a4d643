//! Exact 0/1 knapsack by dynamic programming.
//!
//! `dp[[i, w]]` holds the best value reachable with the first `i` items under
//! capacity `w`. Time and memory are both O(n * capacity).

use ndarray::Array2;
use planner_structs::{Capacity, Item, Pick, Selection, SolveMode};

pub fn solve(items: &[Item], capacity: Capacity) -> Selection {
    let dp = build_table(items, capacity.get() as usize);
    let picks = backtrace(items, &dp, capacity.get() as usize);
    Selection::new(SolveMode::ZeroOne, capacity, picks)
}

/// Best total value for `items` under `capacity`, without recovering the subset.
pub fn best_value(items: &[Item], capacity: Capacity) -> f64 {
    let max_weight = capacity.get() as usize;
    build_table(items, max_weight)[[items.len(), max_weight]]
}

fn build_table(items: &[Item], max_weight: usize) -> Array2<f64> {
    let num_items = items.len();
    let mut dp = Array2::<f64>::zeros((num_items + 1, max_weight + 1));

    for i in 1..=num_items {
        let weight = items[i - 1].weight as usize;
        let value = items[i - 1].value;
        for w in 0..=max_weight {
            dp[[i, w]] = if weight <= w {
                dp[[i - 1, w]].max(dp[[i - 1, w - weight]] + value)
            } else {
                dp[[i - 1, w]]
            };
        }
    }
    dp
}

// Walks from the last item back to the first. An item is taken only when it
// strictly improved its cell, so ties resolve towards leaving it out.
fn backtrace(items: &[Item], dp: &Array2<f64>, max_weight: usize) -> Vec<Pick> {
    let mut picks = Vec::new();
    let mut w = max_weight;
    for i in (1..=items.len()).rev() {
        if dp[[i, w]] != dp[[i - 1, w]] {
            picks.push(Pick::full(i - 1, &items[i - 1]));
            w -= items[i - 1].weight as usize;
        }
    }
    picks.reverse();
    picks
}
