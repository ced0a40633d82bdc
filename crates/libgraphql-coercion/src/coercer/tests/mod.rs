mod coercer_tests;
mod output_step_tests;

use crate::coercer::CoercerBuilder;
use crate::coercer::CoercionResult;
use crate::coercer::Direction;
use crate::test_utils::annot;
use crate::test_utils::test_schema;
use crate::types::DefinitionRef;
use crate::Context;
use crate::PathSegment;
use crate::ResolutionInfo;
use crate::ResponsePath;
use crate::Value;
use std::sync::Arc;

fn test_builder() -> CoercerBuilder {
    CoercerBuilder::new(Arc::new(test_schema()))
}

fn field_info() -> ResolutionInfo {
    ResolutionInfo::new("Query", "field")
}

/// A path under the `field` root used by [`field_info()`].
fn field_path(children: Vec<PathSegment>) -> ResponsePath {
    let mut segments = vec![PathSegment::Field("field".to_string())];
    segments.extend(children);
    ResponsePath::from(segments)
}

async fn coerce(
    builder: &CoercerBuilder,
    type_ref: &str,
    direction: Direction,
    value: Value,
) -> CoercionResult {
    builder.coercer_for(&annot(type_ref), direction)
        .coerce(value, DefinitionRef::Variable("v"), &Context::empty(), &field_info())
        .await
}
