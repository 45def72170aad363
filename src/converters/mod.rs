//! Converters for generating test scenarios from extracted endpoints
//!
//! This module provides the conversion trait and the raxtest implementation
//! that turns endpoint descriptors into a scenario document and fixture data.

pub mod fixture;
pub mod raxtest;

pub use raxtest::{RaxtestConverter, ScenarioBundle};

use crate::models::ExtractedEndpoints;
use std::path::Path;

/// Configuration options for converters
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Base URL of the server under test
    pub base_url: String,
    /// Fixture file reference embedded in the scenario (e.g. "json://data.json")
    pub data_ref: String,
}

impl ConvertOptions {
    pub fn new(base_url: impl Into<String>, data_ref: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            data_ref: data_ref.into(),
        }
    }

    /// Options for a fixture file written to `data_path`
    pub fn for_data_path(base_url: impl Into<String>, data_path: &Path) -> Self {
        Self::new(base_url, data_ref_for(data_path))
    }
}

/// Reference the runner uses to locate the fixture file
pub fn data_ref_for(data_path: &Path) -> String {
    format!("json://{}", data_path.display())
}

/// Trait for converting extracted endpoints to test scenarios
pub trait Converter {
    /// The output type of the conversion
    type Output;

    /// Convert the extracted endpoints of one document
    fn convert(&self, endpoints: &ExtractedEndpoints, options: &ConvertOptions) -> Self::Output;
}
