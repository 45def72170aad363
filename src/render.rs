//! Serialization and persistence of generated artifacts

use crate::converters::ScenarioBundle;
use crate::error::{GenError, Result};
use crate::models::{FixtureMap, RootScenario};
use std::fs;
use std::path::Path;

/// Serialize the scenario document to YAML
pub fn scenario_to_yaml(scenario: &RootScenario) -> Result<String> {
    serde_yaml::to_string(scenario).map_err(|e| {
        GenError::SerializationError(format!("Failed to serialize scenario to YAML: {}", e))
    })
}

/// Serialize the fixture map to pretty-printed JSON
pub fn fixtures_to_json(fixtures: &FixtureMap) -> Result<String> {
    serde_json::to_string_pretty(fixtures).map_err(|e| {
        GenError::SerializationError(format!("Failed to serialize fixtures to JSON: {}", e))
    })
}

/// Write the fixture file, then the scenario file
///
/// If the scenario fails after the fixture file was written, the fixture
/// file is left in place.
pub fn render_bundle<P, Q>(bundle: &ScenarioBundle, scenario_path: P, data_path: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let scenario_path = scenario_path.as_ref();
    let data_path = data_path.as_ref();

    let json = fixtures_to_json(&bundle.fixtures)?;
    fs::write(data_path, json)?;
    tracing::debug!(path = %data_path.display(), entries = bundle.fixtures.len(), "wrote fixtures");

    let yaml = scenario_to_yaml(&bundle.scenario)?;
    fs::write(scenario_path, yaml)?;
    tracing::debug!(path = %scenario_path.display(), "wrote scenario");

    Ok(())
}
