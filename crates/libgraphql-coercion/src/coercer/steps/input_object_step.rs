use crate::arguments::coerce_entry;
use crate::coercer::build_coercer;
use crate::coercer::Coercer;
use crate::coercer::CoercerCache;
use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Direction;
use crate::coercer::Next;
use crate::directives::get_directive_instances;
use crate::directives::wrap_with_directives;
use crate::directives::HookName;
use crate::schema::SchemaLookup;
use crate::types::DefinitionRef;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::Weak;

/// How a single declared input field is coerced.
struct InputFieldPlan {
    coercer: Coercer,
    directives: Coercer,
}

/// Coerces an input object value field by field.
///
/// Each declared field goes through the same absent/default/present decision
/// as a field argument. Fields missing from the value are absent (and so may
/// take their default); whether a missing field is required is left to
/// validation. Keys the type does not declare are dropped.
///
/// Field coercers are built on first use rather than when this step is
/// built, so that self-referencing input types (`input Filter { and:
/// [Filter!] }`) do not recurse at build time. When the step was built by a
/// [`CoercerBuilder`](crate::coercer::CoercerBuilder) they come from its
/// cache, so nested values of the same type share one coercer.
pub struct InputObjectStep {
    cache: Weak<CoercerCache>,
    field_plans: OnceLock<IndexMap<String, InputFieldPlan>>,
    lookup: Arc<dyn SchemaLookup>,
    type_name: String,
}
impl InputObjectStep {
    pub(crate) fn new(
        type_name: impl Into<String>,
        lookup: Arc<dyn SchemaLookup>,
        cache: Weak<CoercerCache>,
    ) -> Self {
        Self {
            cache,
            field_plans: OnceLock::new(),
            lookup,
            type_name: type_name.into(),
        }
    }

    fn field_coercer(&self, type_annotation: &TypeAnnotation) -> Coercer {
        match self.cache.upgrade() {
            Some(cache) => cache.coercer_for(type_annotation, Direction::Input),
            None => build_coercer(type_annotation, &self.lookup, Direction::Input),
        }
    }

    fn field_plans(
        &self,
        input_type: &InputObjectType,
    ) -> &IndexMap<String, InputFieldPlan> {
        self.field_plans.get_or_init(|| {
            log::debug!(
                "Building input field coercers for input object `{}`.",
                self.type_name,
            );
            input_type.fields().iter().map(|(field_name, field)| {
                let bindings = get_directive_instances(
                    field.directives(),
                    self.lookup.as_ref(),
                );
                (field_name.to_string(), InputFieldPlan {
                    coercer: self.field_coercer(field.type_annotation()),
                    directives: wrap_with_directives(
                        &bindings,
                        HookName::OnArgumentExecution,
                        None,
                    ),
                })
            }).collect()
        })
    }
}
impl CoercionStep for InputObjectStep {
    fn label(&self) -> String {
        format!("InputObject({})", self.type_name)
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        async move {
            let mut entries = match value {
                Value::Null => return Ok(Value::Null),
                Value::Object(entries) => entries,
                other => return Err(scope.invalid_value(
                    self.type_name.as_str(),
                    format!(
                        "Expected a value of input object type `{}`, found {} \
                        value: {other}",
                        self.type_name,
                        other.kind_name(),
                    ),
                )),
            };

            let Some(input_type) = self.lookup.find_input_object(&self.type_name) else {
                log::debug!(
                    "Input object `{}` is no longer defined; passing value through.",
                    self.type_name,
                );
                return next.run(Value::Object(entries), scope).await;
            };

            let plans = self.field_plans(input_type);
            let mut coerced = IndexMap::with_capacity(plans.len());
            for (field_name, field) in input_type.fields() {
                let Some(plan) = plans.get(field_name) else {
                    continue;
                };
                let field_info = scope.info.with_field(field_name);
                let field_scope = scope
                    .with_info(&field_info)
                    .with_definition(DefinitionRef::InputField(field));
                let result = coerce_entry(
                    entries.shift_remove(field_name.as_str()),
                    field.default_value(),
                    &plan.coercer,
                    &plan.directives,
                    field_scope,
                ).await?;
                if let Some(field_value) = result {
                    coerced.insert(field_name.to_string(), field_value);
                }
            }

            for ignored_key in entries.keys() {
                log::trace!(
                    "Dropping undeclared key `{ignored_key}` from `{}` value.",
                    self.type_name,
                );
            }

            next.run(Value::Object(coerced), scope).await
        }.boxed()
    }
}
