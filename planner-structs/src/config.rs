use crate::{
    core::{Item, SolveMode},
    error::{PlannerError, PlannerResult},
    serializable_struct_with_getters,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_CAPACITY: u32 = 100_000;

fn default_max_capacity() -> u32 {
    DEFAULT_MAX_CAPACITY
}

serializable_struct_with_getters! {
    PlannerConfig {
        #[serde(default = "default_max_capacity")]
        max_capacity: u32,
        #[serde(default)]
        default_mode: SolveMode,
        items: Option<Vec<Item>>,
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            default_mode: SolveMode::default(),
            items: None,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> PlannerResult<()> {
        if self.max_capacity == 0 {
            return Err(PlannerError::InvalidConfig {
                field: "max_capacity",
                value: self.max_capacity.to_string(),
            });
        }
        Ok(())
    }
}
