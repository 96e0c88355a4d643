use crate::{
    core::Item,
    error::{PlannerError, PlannerResult},
};
use planner_utils::parse_whole_number;
use tracing::{debug, info};

/// Ordered list of items available to the solvers.
///
/// Items are addressed by position. Adding and deleting are the only
/// mutations; an item is never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRepository {
    items: Vec<Item>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Accepts an externally supplied list, rejecting negative or non-finite values.
    pub fn try_from_items(items: Vec<Item>) -> PlannerResult<Self> {
        if let Some(item) = items
            .iter()
            .find(|item| !item.value.is_finite() || item.value < 0.0)
        {
            return Err(PlannerError::InvalidNumericInput {
                field: "value",
                input: item.value.to_string(),
            });
        }
        Ok(Self::from_items(items))
    }

    /// The starter list a new planner session opens with.
    pub fn with_defaults() -> Self {
        Self::from_items(default_items())
    }

    pub fn append(&mut self, item: Item) {
        debug!(name = %item.name, weight = item.weight, value = item.value, "item added");
        self.items.push(item);
    }

    /// Parses the raw form fields and appends the resulting item.
    ///
    /// Both numbers are validated before anything is stored, so a rejected
    /// input leaves the list unchanged.
    pub fn add_from_input(
        &mut self,
        name: &str,
        weight: &str,
        value: &str,
    ) -> PlannerResult<&Item> {
        let weight = parse_whole_number(weight).map_err(|_| PlannerError::InvalidNumericInput {
            field: "weight",
            input: weight.to_string(),
        })?;
        let value = parse_whole_number(value).map_err(|_| PlannerError::InvalidNumericInput {
            field: "value",
            input: value.to_string(),
        })?;
        self.append(Item::new(name.trim(), weight, value as f64));
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn delete_at(&mut self, index: usize) -> PlannerResult<Item> {
        if index >= self.items.len() {
            return Err(PlannerError::Selection {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        info!(index, name = %item.name, "item deleted");
        Ok(item)
    }

    /// Deletes the currently selected item, if any.
    pub fn delete_selected(&mut self, selected: Option<usize>) -> PlannerResult<Item> {
        match selected {
            Some(index) => self.delete_at(index),
            None => Err(PlannerError::NoSelection),
        }
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for ItemRepository {
    fn from(items: Vec<Item>) -> Self {
        Self::from_items(items)
    }
}

pub fn default_items() -> Vec<Item> {
    [
        ("Food Supplies", 10, 60),
        ("Medical Kits", 8, 40),
        ("Books", 4, 20),
        ("Sleeping Bags", 12, 50),
        ("Water Bottles", 3, 10),
        ("First Aid Kits", 6, 35),
        ("Tents", 15, 80),
        ("Flashlights", 2, 15),
        ("Blankets", 9, 45),
    ]
    .into_iter()
    .map(|(name, weight, value)| Item::new(name, weight, value as f64))
    .collect()
}
