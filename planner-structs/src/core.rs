use crate::{
    error::{PlannerError, PlannerResult},
    serializable_struct_with_getters,
};
use planner_utils::parse_signed;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

serializable_struct_with_getters! {
    Item {
        name: String,
        weight: u32,
        value: f64,
    }
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    /// Value per unit of weight. Zero-weight items rank above everything else.
    pub fn ratio(&self) -> f64 {
        planner_utils::ratio(self.value, self.weight)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Weight = {}, Value = {}",
            self.name, self.weight, self.value
        )
    }
}

/// Weight budget for a single solve.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Capacity(u32);

impl Capacity {
    /// Validates a user-supplied capacity against the memory bound `max`.
    pub fn checked(raw: i64, max: u32) -> PlannerResult<Self> {
        if raw < 0 {
            return Err(PlannerError::NegativeCapacity { capacity: raw });
        }
        if raw > max as i64 {
            return Err(PlannerError::CapacityTooLarge { capacity: raw, max });
        }
        Ok(Self(raw as u32))
    }

    pub fn parse(text: &str, max: u32) -> PlannerResult<Self> {
        let raw = parse_signed(text).map_err(|_| PlannerError::InvalidNumericInput {
            field: "capacity",
            input: text.to_string(),
        })?;
        Self::checked(raw, max)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Capacity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolveMode {
    #[default]
    #[serde(rename = "01")]
    ZeroOne,
    #[serde(rename = "fractional", alias = "Fractional")]
    Fractional,
}

impl FromStr for SolveMode {
    type Err = PlannerError;

    /// `"01"` must match exactly; `"fractional"` is matched in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "01" {
            Ok(SolveMode::ZeroOne)
        } else if s.eq_ignore_ascii_case("fractional") {
            Ok(SolveMode::Fractional)
        } else {
            Err(PlannerError::InvalidMode {
                input: s.to_string(),
            })
        }
    }
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMode::ZeroOne => write!(f, "01"),
            SolveMode::Fractional => write!(f, "fractional"),
        }
    }
}

serializable_struct_with_getters! {
    Pick {
        index: usize,
        item: Item,
        fraction: f64,
    }
}

impl Pick {
    pub fn full(index: usize, item: &Item) -> Self {
        Self {
            index,
            item: item.clone(),
            fraction: 1.0,
        }
    }

    /// Takes `weight` units of `item`, scaling its value to match.
    pub fn partial(index: usize, item: &Item, weight: u32) -> Self {
        let value = item.value * weight as f64 / item.weight as f64;
        Self {
            index,
            item: Item::new(item.name.clone(), weight, value),
            fraction: weight as f64 / item.weight as f64,
        }
    }

    pub fn is_partial(&self) -> bool {
        self.fraction < 1.0
    }
}

serializable_struct_with_getters! {
    Selection {
        mode: SolveMode,
        capacity: Capacity,
        picks: Vec<Pick>,
    }
}

impl Selection {
    pub fn new(mode: SolveMode, capacity: Capacity, picks: Vec<Pick>) -> Self {
        Self {
            mode,
            capacity,
            picks,
        }
    }

    pub fn total_value(&self) -> f64 {
        self.picks.iter().map(|p| p.item.value).sum()
    }

    pub fn total_weight(&self) -> u64 {
        self.picks.iter().map(|p| p.item.weight as u64).sum()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.picks.iter().map(|p| p.index).collect()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.picks.iter().map(|p| &p.item)
    }

    pub fn partial_pick(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_partial())
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Value: {}", self.total_value())?;
        writeln!(f)?;
        for item in self.items() {
            writeln!(
                f,
                "{} - Weight: {}, Value: {}",
                item.name, item.weight, item.value
            )?;
        }
        Ok(())
    }
}
