use planner_structs::Item;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Builds a reproducible item list for demos and benchmarks.
///
/// Weights are drawn from `1..=max_weight` and values from `0..=max_value`.
pub fn generate_items(seed: u64, num_items: usize, max_weight: u32, max_value: u32) -> Vec<Item> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);
    (0..num_items)
        .map(|i| {
            let weight = rng.gen_range(1..=max_weight);
            let value = rng.gen_range(0..=max_value);
            Item::new(format!("item-{}", i), weight, value as f64)
        })
        .collect()
}
