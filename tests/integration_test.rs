use raxtest_gen::extractor::extract_endpoints;
use raxtest_gen::loader::load_openapi;
use raxtest_gen::models::ParamKind;
use serde_json::json;
use std::path::Path;

#[test]
fn test_load_openapi_fixture() {
    let path = Path::new("tests/fixtures/openapi.yaml");
    let result = load_openapi(path);

    assert!(result.is_ok(), "Failed to load OpenAPI fixture");

    let document = result.unwrap();
    assert_eq!(document.spec.info.title, "Pet Store API");
    assert_eq!(document.spec.openapi, "3.0.3");
    assert_eq!(document.path_count(), 5);
}

#[test]
fn test_fixture_paths_are_partitioned() {
    let document = load_openapi("tests/fixtures/openapi.yaml").unwrap();
    let endpoints = extract_endpoints(&document).unwrap();

    let ordinary: Vec<&str> = endpoints
        .ordinary
        .iter()
        .map(|e| e.display_name.as_str())
        .collect();
    assert_eq!(ordinary, vec!["Pets", "PetsPetIdOwner", "UsersId"]);

    assert_eq!(endpoints.login.len(), 1);
    assert_eq!(endpoints.login[0].path, "/auth/login");
    assert_eq!(endpoints.logout.len(), 1);
    assert_eq!(endpoints.logout[0].path, "/auth/logout");
}

#[test]
fn test_fixture_parameters() {
    let document = load_openapi("tests/fixtures/openapi.yaml").unwrap();
    let endpoints = extract_endpoints(&document).unwrap();

    let pets = &endpoints.ordinary[0];
    let get = &pets.methods[0];
    assert_eq!(get.method, "GET");
    assert_eq!(get.queries.len(), 2);
    assert_eq!(get.queries[0].name, "limit");
    assert_eq!(get.queries[0].kind, ParamKind::Number);
    assert_eq!(get.queries[1].example, Some(json!("cat")));

    // Path parameters are not query parameters
    let owner = &endpoints.ordinary[1];
    assert!(owner.methods[0].queries.is_empty());

    let users = &endpoints.ordinary[2];
    let put = &users.methods[0];
    assert_eq!(put.method, "PUT");
    let kinds: Vec<(&str, ParamKind)> = put
        .bodies
        .iter()
        .map(|p| (p.name.as_str(), p.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![("email", ParamKind::String), ("score", ParamKind::Other)]
    );
}

#[test]
fn test_list_command_on_fixture() {
    let result = raxtest_gen::commands::execute_list(Path::new("tests/fixtures/openapi.yaml"));
    assert!(result.is_ok());
}
