use crate::error::{GenError, Result};
use crate::models::{ParamKind, ParamSpec};
use oas3::OpenApiV3Spec;
use oas3::spec::{
    ObjectOrReference, ObjectSchema, Operation, ParameterIn, SchemaType, SchemaTypeSet,
};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Extract the query parameters of an operation, in declaration order
pub fn query_params(spec: &OpenApiV3Spec, operation: &Operation) -> Result<Vec<ParamSpec>> {
    let mut params = vec![];

    for param_ref in &operation.parameters {
        let param = param_ref
            .resolve(spec)
            .map_err(|e| ref_error(param_ref, e))?;

        if param.location != ParameterIn::Query {
            continue;
        }

        let schema = param
            .schema
            .as_ref()
            .map(|s| s.resolve(spec).map_err(|e| ref_error(s, e)))
            .transpose()?;
        let kind = schema.as_ref().map(kind_of).unwrap_or(ParamKind::Other);
        let example = param
            .example
            .clone()
            .or_else(|| schema.and_then(|s| s.example));

        params.push(ParamSpec {
            name: param.name,
            kind,
            example,
        });
    }

    Ok(params)
}

/// Extract the top-level properties of the JSON request body schema
pub fn body_params(spec: &OpenApiV3Spec, operation: &Operation) -> Result<Vec<ParamSpec>> {
    let Some(body_ref) = operation.request_body.as_ref() else {
        return Ok(vec![]);
    };

    let body = body_ref
        .resolve(spec)
        .map_err(|e| ref_error(body_ref, e))?;
    let Some(schema_ref) = body
        .content
        .get(JSON_MEDIA_TYPE)
        .and_then(|media| media.schema.as_ref())
    else {
        return Ok(vec![]);
    };

    let schema = schema_ref
        .resolve(spec)
        .map_err(|e| ref_error(schema_ref, e))?;

    schema
        .properties
        .iter()
        .map(|(name, prop_ref)| {
            let prop = prop_ref
                .resolve(spec)
                .map_err(|e| ref_error(prop_ref, e))?;
            Ok(ParamSpec {
                name: name.clone(),
                kind: kind_of(&prop),
                example: prop.example,
            })
        })
        .collect()
}

/// Collapse a schema's declared type into a parameter kind
///
/// For a type list (`[string, "null"]`) the first non-null entry wins.
pub fn kind_of(schema: &ObjectSchema) -> ParamKind {
    match schema.schema_type.as_ref() {
        Some(SchemaTypeSet::Single(ty)) => ParamKind::from(*ty),
        Some(SchemaTypeSet::Multiple(types)) => types
            .iter()
            .find(|ty| **ty != SchemaType::Null)
            .map(|ty| ParamKind::from(*ty))
            .unwrap_or(ParamKind::Other),
        None => ParamKind::Other,
    }
}

fn ref_error<T>(object: &ObjectOrReference<T>, e: impl std::fmt::Display) -> GenError {
    let target = match object {
        ObjectOrReference::Ref { ref_path, .. } => ref_path.as_str(),
        ObjectOrReference::Object(_) => "inline object",
    };
    GenError::SchemaLoadError(format!("Failed to resolve {}: {}", target, e))
}
