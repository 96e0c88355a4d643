use anyhow::{anyhow, Result};
use planner_structs::{Item, ItemRepository, PlannerConfig};
use planner_utils::{dejsonify, load_text};
use tracing::{debug, info};

pub fn load_config(source: Option<&String>) -> Result<PlannerConfig> {
    let config = match source {
        Some(source) => {
            let text = load_text(source)?;
            dejsonify::<PlannerConfig>(&text)
                .map_err(|e| anyhow!("Failed to parse config: {}", e))?
        }
        None => PlannerConfig::default(),
    };
    config.validate()?;
    debug!(
        max_capacity = config.max_capacity,
        default_mode = %config.default_mode,
        "config loaded"
    );
    Ok(config)
}

/// Picks the item list from `--items`, then the config, then the built-in defaults.
pub fn load_items(source: Option<&String>, config: &PlannerConfig) -> Result<ItemRepository> {
    let repository = if let Some(source) = source {
        let text = load_text(source)?;
        let items = dejsonify::<Vec<Item>>(&text)
            .map_err(|e| anyhow!("Failed to parse items: {}", e))?;
        ItemRepository::try_from_items(items)?
    } else if let Some(items) = config.items() {
        ItemRepository::try_from_items(items.clone())?
    } else {
        ItemRepository::with_defaults()
    };
    info!(num_items = repository.len(), "items loaded");
    Ok(repository)
}
