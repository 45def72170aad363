//! Deterministic fixture value generation

use crate::models::{FixtureEntry, MethodSpec, ParamKind, ParamSpec};
use indexmap::IndexMap;
use serde_json::Value;

/// Placeholder for string parameters without an example
pub const DUMMY_STRING: &str = "dummy";

/// Generate one value per parameter, keyed by parameter name
///
/// Strings use their example when present, numbers are always `0` and
/// every other kind is an empty string.
pub fn generate_values(params: &[ParamSpec]) -> IndexMap<String, Value> {
    params
        .iter()
        .map(|param| (param.name.clone(), generate_value(param)))
        .collect()
}

fn generate_value(param: &ParamSpec) -> Value {
    match param.kind {
        ParamKind::String => param
            .example
            .clone()
            .unwrap_or_else(|| Value::from(DUMMY_STRING)),
        ParamKind::Number => Value::from(0),
        ParamKind::Other => Value::from(""),
    }
}

/// Build the fixture entry for one method
pub fn fixture_entry(method: &MethodSpec, expect_status: Option<u16>) -> FixtureEntry {
    FixtureEntry {
        body: generate_values(&method.bodies),
        query: generate_values(&method.queries),
        expect_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_uses_example() {
        let params = vec![ParamSpec::new("name", ParamKind::String).with_example(json!("alice"))];
        assert_eq!(generate_values(&params)["name"], json!("alice"));
    }

    #[test]
    fn test_string_without_example_is_dummy() {
        let params = vec![ParamSpec::new("name", ParamKind::String)];
        assert_eq!(generate_values(&params)["name"], json!("dummy"));
    }

    #[test]
    fn test_number_ignores_example() {
        let params = vec![ParamSpec::new("age", ParamKind::Number).with_example(json!(42))];
        assert_eq!(generate_values(&params)["age"], json!(0));
    }

    #[test]
    fn test_other_is_empty_string() {
        let params = vec![
            ParamSpec::new("flag", ParamKind::Other).with_example(json!(true)),
            ParamSpec::new("count", ParamKind::Other),
        ];
        let values = generate_values(&params);
        assert_eq!(values["flag"], json!(""));
        assert_eq!(values["count"], json!(""));
    }

    #[test]
    fn test_values_keep_parameter_order() {
        let params = vec![
            ParamSpec::new("zeta", ParamKind::String),
            ParamSpec::new("alpha", ParamKind::Number),
        ];
        let values = generate_values(&params);
        let keys: Vec<&String> = values.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_fixture_entry_without_params() {
        let entry = fixture_entry(&MethodSpec::new("GET"), Some(401));
        assert!(entry.body.is_empty());
        assert!(entry.query.is_empty());
        assert_eq!(entry.expect_status, Some(401));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "expect_status": 401 })
        );
    }
}
