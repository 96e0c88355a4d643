use planner_structs::{config::DEFAULT_MAX_CAPACITY, Item, PlannerConfig, PlannerError, SolveMode};
use planner_utils::dejsonify;

#[test]
fn test_config_defaults() {
    let config: PlannerConfig = dejsonify("{}").unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.max_capacity, DEFAULT_MAX_CAPACITY);
    assert_eq!(config.default_mode, SolveMode::ZeroOne);
    assert_eq!(config.items(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_overrides() {
    let config: PlannerConfig = dejsonify(
        r#"{
            "max_capacity": 500,
            "default_mode": "fractional",
            "items": [{"name": "A", "weight": 5, "value": 10}]
        }"#,
    )
    .unwrap();
    assert_eq!(config.max_capacity, 500);
    assert_eq!(config.default_mode, SolveMode::Fractional);
    assert_eq!(config.items(), Some(&vec![Item::new("A", 5, 10.0)]));
}

#[test]
fn test_config_rejects_zero_max_capacity() {
    let config: PlannerConfig = dejsonify(r#"{"max_capacity": 0}"#).unwrap();
    assert_eq!(
        config.validate(),
        Err(PlannerError::InvalidConfig {
            field: "max_capacity",
            value: "0".to_string()
        })
    );
}
