//! raxtest scenario assembly
//!
//! Login endpoints become init steps, and every init step begets a category
//! in which all ordinary endpoints are re-tested as if logged in through it.
//! A further no-auth category runs the same steps without logging in.

use super::fixture::fixture_entry;
use super::{ConvertOptions, Converter};
use crate::models::raxtest::{AUTHORIZED_STATUS, NO_AUTH_CATEGORY, UNAUTHORIZED_STATUS};
use crate::models::{
    Category, EndpointSpec, ExtractedEndpoints, FixtureEntry, FixtureMap, MethodSpec,
    RootScenario, ScenarioStep, StepOption,
};
use indexmap::IndexMap;

/// The two artifacts produced for one document
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioBundle {
    pub scenario: RootScenario,
    pub fixtures: FixtureMap,
}

/// Authentication state a category evaluates its steps under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthState<'a> {
    NoAuth,
    LoggedIn(&'a str),
}

impl AuthState<'_> {
    fn category_name(&self) -> &str {
        match self {
            AuthState::NoAuth => NO_AUTH_CATEGORY,
            AuthState::LoggedIn(step) => *step,
        }
    }

    fn login_ref(&self) -> String {
        match self {
            AuthState::NoAuth => String::new(),
            AuthState::LoggedIn(step) => step.to_string(),
        }
    }

    fn expect_status(&self) -> u16 {
        match self {
            AuthState::NoAuth => UNAUTHORIZED_STATUS,
            AuthState::LoggedIn(_) => AUTHORIZED_STATUS,
        }
    }
}

/// Converter producing raxtest scenario and fixture structures
#[derive(Debug, Clone, Default)]
pub struct RaxtestConverter;

impl RaxtestConverter {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the scenario document and fixture map
    pub fn assemble(
        options: &ConvertOptions,
        ordinary: &[EndpointSpec],
        login: &[EndpointSpec],
    ) -> ScenarioBundle {
        let mut fixtures = FixtureMap::new();

        let mut init = vec![];
        for (step, entry) in Self::login_steps(login) {
            add_fixture(&mut fixtures, &step.ref_data, entry);
            init.push(step);
        }

        let roster = std::iter::once(AuthState::NoAuth)
            .chain(init.iter().map(|step| AuthState::LoggedIn(&step.name)));

        let mut categories = IndexMap::new();
        for auth in roster {
            let mut steps = vec![];
            for (step, entry) in Self::category_steps(auth, ordinary) {
                add_fixture(&mut fixtures, &step.ref_data, entry);
                steps.push(step);
            }

            tracing::debug!(
                category = auth.category_name(),
                steps = steps.len(),
                "assembled category"
            );

            categories.insert(
                auth.category_name().to_string(),
                Category {
                    login: auth.login_ref(),
                    steps,
                },
            );
        }

        tracing::info!(
            init_steps = init.len(),
            categories = categories.len(),
            fixtures = fixtures.len(),
            "scenario assembly finished"
        );

        ScenarioBundle {
            scenario: RootScenario {
                base_url: options.base_url.clone(),
                data: options.data_ref.clone(),
                init,
                categories,
            },
            fixtures,
        }
    }

    /// Init steps for every login endpoint and method
    fn login_steps(login: &[EndpointSpec]) -> Vec<(ScenarioStep, FixtureEntry)> {
        login
            .iter()
            .flat_map(|endpoint| endpoint.methods.iter().map(move |method| (endpoint, method)))
            .map(|(endpoint, method)| {
                let name = endpoint.step_name(method);
                let step = build_step(endpoint, method, name.clone(), name);
                (step, fixture_entry(method, None))
            })
            .collect()
    }

    /// Steps for every ordinary endpoint and method under one auth state
    fn category_steps(
        auth: AuthState<'_>,
        ordinary: &[EndpointSpec],
    ) -> Vec<(ScenarioStep, FixtureEntry)> {
        ordinary
            .iter()
            .flat_map(|endpoint| endpoint.methods.iter().map(move |method| (endpoint, method)))
            .map(|(endpoint, method)| {
                let name = endpoint.step_name(method);
                let ref_data = format!("{}/{}", auth.category_name(), name);
                let step = build_step(endpoint, method, name, ref_data);
                (step, fixture_entry(method, Some(auth.expect_status())))
            })
            .collect()
    }
}

impl Converter for RaxtestConverter {
    type Output = ScenarioBundle;

    fn convert(&self, endpoints: &ExtractedEndpoints, options: &ConvertOptions) -> Self::Output {
        Self::assemble(options, &endpoints.ordinary, &endpoints.login)
    }
}

fn build_step(
    endpoint: &EndpointSpec,
    method: &MethodSpec,
    name: String,
    ref_data: String,
) -> ScenarioStep {
    ScenarioStep {
        name,
        path: endpoint.path.clone(),
        method: method.method.clone(),
        ref_data,
        option: StepOption {
            query: method.has_query(),
            body: method.has_body(),
        },
    }
}

/// Colliding display names append a further variant instead of replacing
fn add_fixture(fixtures: &mut FixtureMap, key: &str, entry: FixtureEntry) {
    fixtures.entry(key.to_string()).or_default().push(entry);
}
