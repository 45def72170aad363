use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the category whose steps run without logging in
pub const NO_AUTH_CATEGORY: &str = "";

/// Expected status for ordinary steps run without authentication
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Expected status for ordinary steps run after a login step
pub const AUTHORIZED_STATUS: u16 = 200;

/// Fixture data keyed by a step's `ref_data`
pub type FixtureMap = IndexMap<String, Vec<FixtureEntry>>;

/// raxtest scenario root object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootScenario {
    /// Base URL of the server under test
    pub base_url: String,

    /// Reference to the fixture file (e.g. "json://data.json")
    pub data: String,

    /// Steps run once before any category (the login calls)
    #[serde(default)]
    pub init: Vec<ScenarioStep>,

    /// Authentication categories keyed by name
    #[serde(default)]
    pub categories: IndexMap<String, Category>,
}

impl RootScenario {
    /// All steps of the document: init steps followed by each category's steps
    pub fn all_steps(&self) -> impl Iterator<Item = &ScenarioStep> {
        self.init
            .iter()
            .chain(self.categories.values().flat_map(|c| c.steps.iter()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Name of the init step to log in with; empty for the no-auth category
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub login: String,

    /// Steps evaluated under this category's authentication state
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStep {
    pub name: String,
    pub path: String,
    pub method: String,

    /// Key into the fixture map
    pub ref_data: String,

    pub option: StepOption,
}

/// Which parts of the fixture entry the runner should send
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOption {
    pub query: bool,
    pub body: bool,
}

/// One data variant for a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureEntry {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub body: IndexMap<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub query: IndexMap<String, serde_json::Value>,

    /// Not set for login init steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_status: Option<u16>,
}
