use crate::error::{GenError, Result};
use indexmap::IndexMap;
use oas3::OpenApiV3Spec;
use oas3::spec::PathItem;
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::fs;
use std::path::Path;

/// A loaded OpenAPI document
///
/// `oas3` keeps paths in a sorted map, so the order in which paths appear in
/// the source file is recorded separately and used for iteration.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    pub spec: OpenApiV3Spec,
    path_order: Vec<String>,
}

/// Only the path keys, in the order they appear in the file
#[derive(Deserialize)]
struct PathOrder {
    #[serde(default)]
    paths: Option<IndexMap<String, IgnoredAny>>,
}

impl ApiDocument {
    /// Parse a document from YAML or JSON text
    pub fn parse(content: &str) -> Result<Self> {
        let spec: OpenApiV3Spec = serde_yaml::from_str(content).map_err(|e| {
            GenError::SchemaLoadError(format!("Failed to parse OpenAPI document: {}", e))
        })?;

        validate_openapi(&spec)?;

        let order: PathOrder = serde_yaml::from_str(content).map_err(|e| {
            GenError::SchemaLoadError(format!("Failed to read path order: {}", e))
        })?;

        let path_order = order
            .paths
            .map(|paths| paths.into_keys().collect())
            .unwrap_or_default();

        Ok(Self { spec, path_order })
    }

    /// Iterate over `(path, item)` pairs in document order
    pub fn paths(&self) -> Vec<(&str, &PathItem)> {
        let Some(paths) = self.spec.paths.as_ref() else {
            return Vec::new();
        };

        let mut ordered: IndexMap<&str, &PathItem> = self
            .path_order
            .iter()
            .filter_map(|path| paths.get_key_value(path))
            .map(|(path, item)| (path.as_str(), item))
            .collect();

        // Keys the order scan did not see keep the map's own order
        for (path, item) in paths {
            ordered.entry(path.as_str()).or_insert(item);
        }

        ordered.into_iter().collect()
    }

    pub fn path_count(&self) -> usize {
        self.spec.paths.as_ref().map(|p| p.len()).unwrap_or(0)
    }
}

/// Load an OpenAPI specification from a file
pub fn load_openapi<P: AsRef<Path>>(path: P) -> Result<ApiDocument> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        GenError::SchemaLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    let document = ApiDocument::parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        paths = document.path_count(),
        "loaded OpenAPI document"
    );

    Ok(document)
}

/// Reject documents that are not OpenAPI 3.x
///
/// A document without paths is valid and simply yields no endpoints.
fn validate_openapi(spec: &OpenApiV3Spec) -> Result<()> {
    if !spec.openapi.starts_with("3.0") && !spec.openapi.starts_with("3.1") {
        return Err(GenError::SchemaLoadError(format!(
            "Unsupported OpenAPI version: {}. Only 3.0.x and 3.1.x are supported.",
            spec.openapi
        )));
    }

    Ok(())
}
