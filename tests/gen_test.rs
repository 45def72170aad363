use raxtest_gen::GenError;
use raxtest_gen::commands::{GenCommandArgs, execute_gen, generate_bundle};
use raxtest_gen::converters::ConvertOptions;
use raxtest_gen::loader::load_openapi;
use raxtest_gen::models::{FixtureMap, RootScenario};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/openapi.yaml";
const SERVER: &str = "http://localhost:8080";

fn run_gen(dir: &Path) -> (String, String) {
    let output = dir.join("index.yml");
    let data = dir.join("data.json");

    execute_gen(GenCommandArgs {
        input_path: Path::new(FIXTURE),
        output_path: &output,
        data_path: &data,
        base_url: SERVER,
    })
    .unwrap();

    (
        fs::read_to_string(output).unwrap(),
        fs::read_to_string(data).unwrap(),
    )
}

#[test]
fn gen_writes_scenario_and_fixtures() {
    let dir = TempDir::new().unwrap();
    let (yaml, json) = run_gen(dir.path());

    let scenario: RootScenario = serde_yaml::from_str(&yaml).unwrap();
    let fixtures: FixtureMap = serde_json::from_str(&json).unwrap();

    assert_eq!(scenario.base_url, SERVER);
    assert_eq!(
        scenario.data,
        format!("json://{}", dir.path().join("data.json").display())
    );

    assert_eq!(scenario.init.len(), 1);
    assert_eq!(scenario.init[0].name, "AuthLogin(POST)");

    let categories: Vec<&str> = scenario.categories.keys().map(String::as_str).collect();
    assert_eq!(categories, vec!["", "AuthLogin(POST)"]);

    // Logout endpoints never show up as steps
    assert!(scenario.all_steps().all(|s| s.path != "/auth/logout"));

    for step in scenario.all_steps() {
        assert!(
            fixtures.get(&step.ref_data).is_some_and(|e| !e.is_empty()),
            "missing fixture for {}",
            step.ref_data
        );
    }
}

#[test]
fn gen_fixture_values() {
    let dir = TempDir::new().unwrap();
    let (_, json) = run_gen(dir.path());
    let fixtures: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        fixtures["AuthLogin(POST)"],
        json!([{ "body": { "password": "dummy", "username": "alice" } }])
    );
    assert_eq!(
        fixtures["/Pets(GET)"],
        json!([{ "query": { "limit": 0, "tag": "cat" }, "expect_status": 401 }])
    );
    assert_eq!(
        fixtures["AuthLogin(POST)/Pets(POST)"],
        json!([{
            "body": { "age": 0, "name": "Tama", "vaccinated": "" },
            "expect_status": 200
        }])
    );
    assert_eq!(
        fixtures["AuthLogin(POST)/PetsPetIdOwner(GET)"],
        json!([{ "expect_status": 200 }])
    );
}

#[test]
fn gen_is_idempotent() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let document = load_openapi(FIXTURE).unwrap();
    let options = ConvertOptions::new(SERVER, "json://data.json");
    let a = generate_bundle(&document, &options).unwrap();
    let b = generate_bundle(&document, &options).unwrap();
    assert_eq!(a, b);

    // The data reference embeds each run's own directory
    let (yaml_a, json_a) = run_gen(first.path());
    let (yaml_b, json_b) = run_gen(second.path());
    assert_eq!(json_a, json_b);

    let strip = |yaml: &str| -> String {
        yaml.lines()
            .filter(|line| !line.starts_with("data:"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&yaml_a), strip(&yaml_b));

    let (yaml_c, json_c) = run_gen(first.path());
    assert_eq!(yaml_a, yaml_c);
    assert_eq!(json_a, json_c);
}

#[test]
fn gen_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("index.yml");
    let data = dir.path().join("data.json");

    let result = execute_gen(GenCommandArgs {
        input_path: Path::new("tests/fixtures/does-not-exist.yaml"),
        output_path: &output,
        data_path: &data,
        base_url: SERVER,
    });

    assert!(matches!(result, Err(GenError::SchemaLoadError(_))));
    assert!(!output.exists());
    assert!(!data.exists());
}
