use crate::arguments::coerce_argument;
use crate::arguments::ArgumentsCoercer;
use crate::coercer::CoercerBuilder;
use crate::types::Parameter;
use crate::ArgumentsError;
use crate::CoercionError;
use crate::Context;
use crate::ResolutionInfo;
use crate::Value;
use futures::FutureExt;
use indexmap::IndexMap;

/// Coerces every argument of a field occurrence under `policy`.
///
/// The result is keyed in declaration order and omits undefined arguments
/// (absent, with no default). Any failures are reported together, in
/// declaration order, as an [`ArgumentsError`]. A policy that does not
/// return exactly one result per declared argument is reported as a
/// [`CoercionError::ArgumentCountMismatch`].
pub async fn coerce_arguments(
    definitions: &IndexMap<String, Parameter>,
    occurrences: &IndexMap<String, Value>,
    coercers: &CoercerBuilder,
    context: &Context,
    info: &ResolutionInfo,
    policy: &dyn ArgumentsCoercer,
) -> Result<IndexMap<String, Value>, ArgumentsError> {
    for arg_name in occurrences.keys() {
        if !definitions.contains_key(arg_name) {
            log::debug!(
                "Ignoring undeclared argument `{arg_name}` passed at `{}`.",
                info.path,
            );
        }
    }

    let units = definitions.values()
        .map(|param| {
            coerce_argument(param, occurrences, coercers, context, info).boxed()
        })
        .collect::<Vec<_>>();

    let values = policy.coerce_all(units)
        .await
        .map_err(|errors| ArgumentsError { errors })?;

    if values.len() != definitions.len() {
        log::error!(
            "Arguments policy {policy:?} returned {} results for {} declared \
            arguments at `{}`.",
            values.len(),
            definitions.len(),
            info.path,
        );
        return Err(ArgumentsError {
            errors: vec![CoercionError::ArgumentCountMismatch {
                expected: definitions.len(),
                field_name: info.field_name.to_string(),
                found: values.len(),
                locations: info.locations.clone(),
                parent_type_name: info.parent_type_name.to_string(),
                path: info.path.clone(),
            }],
        });
    }

    Ok(definitions.keys()
        .zip(values)
        .filter_map(|(arg_name, value)| {
            value.map(|value| (arg_name.to_string(), value))
        })
        .collect())
}
