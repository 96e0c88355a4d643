use serde::{Deserialize, Serialize};
use serde_json::json;
use planner_utils::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Entry {
    weight: u32,
    name: String,
}

#[test]
fn test_jsonify_sorts_keys() {
    let entry = Entry {
        weight: 4,
        name: "Books".to_string(),
    };
    assert_eq!(jsonify(&entry), r#"{"name":"Books","weight":4}"#);
}

#[test]
fn test_jsonify_sorts_keys_inside_arrays() {
    let value = json!([{"b": 1, "a": {"d": 2, "c": 3}}]);
    assert_eq!(jsonify(&value), r#"[{"a":{"c":3,"d":2},"b":1}]"#);
}

#[test]
fn test_dejsonify() {
    let entry: Entry = dejsonify(r#"{"name":"Tents","weight":15}"#).unwrap();
    assert_eq!(
        entry,
        Entry {
            weight: 15,
            name: "Tents".to_string()
        }
    );
    assert!(dejsonify::<Entry>(r#"{"name":"Tents"}"#).is_err());
}

#[test]
fn test_load_text_inline() {
    assert_eq!(load_text("[1, 2]").unwrap(), "[1, 2]");
}

#[test]
fn test_load_text_from_file() {
    let path = std::env::temp_dir().join(format!("planner-utils-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"a":1}"#).unwrap();
    assert_eq!(load_text(path.to_str().unwrap()).unwrap(), r#"{"a":1}"#);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_text_missing_file() {
    assert!(load_text("/nonexistent/planner/items.json").is_err());
}
