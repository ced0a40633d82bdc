use crate::coercer::Coercer;
use crate::coercer::CoercerBuilder;
use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::Direction;
use crate::directives::get_directive_instances;
use crate::directives::wrap_with_directives;
use crate::directives::HookName;
use crate::types::DefinitionRef;
use crate::types::Parameter;
use crate::Context;
use crate::ResolutionInfo;
use crate::Value;
use indexmap::IndexMap;

/// Decides the value of a single argument from the occurrences passed to a
/// field.
///
/// * Present (including an explicit `null`): the occurrence's value.
/// * Absent with a default: the default, as declared (defaults are already
///   in coerced form and are not coerced again).
/// * Absent without a default: `None`, meaning the argument is left out of
///   the coerced arguments entirely.
pub fn argument_coercer(
    param: &Parameter,
    occurrences: &IndexMap<String, Value>,
) -> Option<Value> {
    resolve_occurrence(occurrences.get(param.name()).cloned(), param.default_value())
}

pub(crate) fn resolve_occurrence(
    occurrence: Option<Value>,
    default_value: Option<&Value>,
) -> Option<Value> {
    match occurrence {
        Some(value) => Some(value),
        None => default_value.cloned(),
    }
}

/// The pipeline shared by field arguments and input object fields: coerce a
/// present occurrence with `coercer`, make the absent/default decision, then
/// run the result through the `OnArgumentExecution` `directives` chain.
///
/// Undefined results (absent without default) skip the directives chain.
pub(crate) async fn coerce_entry(
    occurrence: Option<Value>,
    default_value: Option<&Value>,
    coercer: &Coercer,
    directives: &Coercer,
    scope: CoercionScope<'_>,
) -> CoercionResult<Option<Value>> {
    let occurrence = match occurrence {
        Some(raw_value) => Some(coercer.run(raw_value, scope).await?),
        None => None,
    };
    let Some(value) = resolve_occurrence(occurrence, default_value) else {
        return Ok(None);
    };
    if directives.is_identity() {
        return Ok(Some(value));
    }
    directives.run(value, scope).await.map(Some)
}

/// Coerces a single argument of a field occurrence: its INPUT coercer, the
/// absent/default decision, then the argument's `OnArgumentExecution`
/// directives.
pub async fn coerce_argument(
    param: &Parameter,
    occurrences: &IndexMap<String, Value>,
    coercers: &CoercerBuilder,
    context: &Context,
    info: &ResolutionInfo,
) -> CoercionResult<Option<Value>> {
    let coercer = coercers.coercer_for(param.type_annotation(), Direction::Input);
    let bindings = get_directive_instances(
        param.directives(),
        coercers.lookup().as_ref(),
    );
    let directives = wrap_with_directives(
        &bindings,
        HookName::OnArgumentExecution,
        None,
    );
    log::trace!(
        "Coercing argument `{}` at `{}`.",
        param.schema_coordinate(),
        info.path,
    );
    coerce_entry(
        occurrences.get(param.name()).cloned(),
        param.default_value(),
        &coercer,
        &directives,
        CoercionScope::new(DefinitionRef::Parameter(param), context, info),
    ).await
}
