//! Schema extraction
//!
//! Walks a loaded OpenAPI document and partitions its endpoints into
//! ordinary, login and logout collections.

pub mod naming;
pub mod parameters;

pub use naming::display_name;

use crate::error::Result;
use crate::loader::ApiDocument;
use crate::models::{EndpointRole, EndpointSpec, ExtractedEndpoints, MethodSpec};
use oas3::OpenApiV3Spec;
use oas3::spec::{Operation, PathItem};

/// Classify a path by its literal text
///
/// `login` is checked before `logout`, so a path containing both is a
/// login path.
pub fn classify_path(path: &str) -> EndpointRole {
    if path.contains("login") {
        EndpointRole::Login
    } else if path.contains("logout") {
        EndpointRole::Logout
    } else {
        EndpointRole::Ordinary
    }
}

/// Extract every endpoint of the document, partitioned by role
pub fn extract_endpoints(document: &ApiDocument) -> Result<ExtractedEndpoints> {
    let mut endpoints = ExtractedEndpoints::default();

    for (path, path_item) in document.paths() {
        let endpoint = EndpointSpec {
            display_name: display_name(path),
            path: path.to_string(),
            methods: extract_methods(&document.spec, path_item)?,
        };

        let role = classify_path(path);
        tracing::debug!(
            path,
            display_name = %endpoint.display_name,
            methods = endpoint.methods.len(),
            ?role,
            "extracted endpoint"
        );

        endpoints.push(role, endpoint);
    }

    tracing::info!(
        ordinary = endpoints.ordinary.len(),
        login = endpoints.login.len(),
        logout = endpoints.logout.len(),
        "schema extraction finished"
    );

    Ok(endpoints)
}

fn extract_methods(spec: &OpenApiV3Spec, path_item: &PathItem) -> Result<Vec<MethodSpec>> {
    let operations: [(&str, &Option<Operation>); 8] = [
        ("GET", &path_item.get),
        ("POST", &path_item.post),
        ("PUT", &path_item.put),
        ("DELETE", &path_item.delete),
        ("PATCH", &path_item.patch),
        ("OPTIONS", &path_item.options),
        ("HEAD", &path_item.head),
        ("TRACE", &path_item.trace),
    ];

    let mut methods = vec![];
    for (method, op_option) in operations {
        if let Some(op) = op_option {
            methods.push(MethodSpec {
                method: method.to_string(),
                queries: parameters::query_params(spec, op)?,
                bodies: parameters::body_params(spec, op)?,
            });
        }
    }

    Ok(methods)
}
