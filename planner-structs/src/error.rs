//! Errors raised while editing the item list or preparing a solve.
//!
//! Every variant describes a rejected user action. None of them leave the
//! repository in a modified state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Invalid {field}: '{input}' is not a whole, non-negative number")]
    InvalidNumericInput { field: &'static str, input: String },

    #[error("No item at position {index} (the list has {len} items)")]
    Selection { index: usize, len: usize },

    #[error("Select an item to delete")]
    NoSelection,

    #[error("Invalid knapsack type '{input}': enter '01' or 'Fractional'")]
    InvalidMode { input: String },

    #[error("Capacity must not be negative (got {capacity})")]
    NegativeCapacity { capacity: i64 },

    #[error("Capacity {capacity} exceeds the configured maximum of {max}")]
    CapacityTooLarge { capacity: i64, max: u32 },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: String },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
