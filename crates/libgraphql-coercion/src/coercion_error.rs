use crate::loc;
use crate::ResponsePath;
use thiserror::Error;

/// A query-time coercion failure.
///
/// Errors propagate unchanged to the immediate caller (list element -> list
/// -> field -> argument set). Deciding whether a failure nulls out a parent
/// field or the whole response is left to the execution pipeline, which can
/// render any [`CoercionError`] into the response `errors` shape with
/// [`CoercionError::to_graphql_error()`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error(
        "Arguments policy for `{parent_type_name}.{field_name}` at `{path}` \
        returned {found} results for {expected} declared arguments"
    )]
    ArgumentCountMismatch {
        expected: usize,
        field_name: String,
        found: usize,
        locations: Vec<loc::Position>,
        parent_type_name: String,
        path: ResponsePath,
    },

    #[error(
        "Invalid value for `{schema_coordinate}` at `{path}`: {message}"
    )]
    InvalidValue {
        locations: Vec<loc::Position>,
        message: String,
        path: ResponsePath,
        schema_coordinate: String,
        type_name: String,
    },

    #[error(
        "Null value for non-nullable `{schema_coordinate}` at `{path}`: \
        expected a value of type `{expected_type}`"
    )]
    NullError {
        expected_type: String,
        locations: Vec<loc::Position>,
        path: ResponsePath,
        schema_coordinate: String,
    },
}
impl CoercionError {
    pub fn locations(&self) -> &[loc::Position] {
        match self {
            Self::ArgumentCountMismatch { locations, .. } => locations.as_slice(),
            Self::InvalidValue { locations, .. } => locations.as_slice(),
            Self::NullError { locations, .. } => locations.as_slice(),
        }
    }

    pub fn path(&self) -> &ResponsePath {
        match self {
            Self::ArgumentCountMismatch { path, .. } => path,
            Self::InvalidValue { path, .. } => path,
            Self::NullError { path, .. } => path,
        }
    }

    pub fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError {
            locations: self.locations().to_vec(),
            message: self.to_string(),
            path: self.path().clone(),
        }
    }
}

/// A coercion failure in the `{message, path, locations}` shape of a GraphQL
/// response's `errors` entries.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<loc::Position>,
    #[serde(skip_serializing_if = "ResponsePath::is_empty")]
    pub path: ResponsePath,
}

/// Every argument coercion failure of a single field occurrence, in argument
/// declaration order.
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Failed to coerce arguments:\n{}",
    errors.iter()
        .map(|err| format!("  * {err}"))
        .collect::<Vec<_>>()
        .join("\n"),
)]
pub struct ArgumentsError {
    pub errors: Vec<CoercionError>,
}
impl ArgumentsError {
    pub fn to_graphql_errors(&self) -> Vec<GraphQLError> {
        self.errors.iter().map(CoercionError::to_graphql_error).collect()
    }
}
