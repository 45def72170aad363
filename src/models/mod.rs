pub mod endpoint;
pub mod raxtest;

pub use endpoint::{EndpointRole, EndpointSpec, ExtractedEndpoints, MethodSpec, ParamKind, ParamSpec};
pub use raxtest::{Category, FixtureEntry, FixtureMap, RootScenario, ScenarioStep, StepOption};
