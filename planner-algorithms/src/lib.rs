pub mod generate;
pub mod knapsack;

pub use generate::generate_items;
pub use knapsack::{fractional, solve, solve_input, zero_one};
