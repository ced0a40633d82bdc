use crate::arguments::coerce_arguments;
use crate::arguments::ArgumentsCoercer;
use crate::coercer::Coercer;
use crate::coercer::CoercerBuilder;
use crate::coercer::CoercionResult;
use crate::coercer::Direction;
use crate::config::CoercionConfig;
use crate::directives::get_directive_instances;
use crate::directives::wrap_with_directives;
use crate::directives::HookName;
use crate::schema::Schema;
use crate::schema::SchemaLookup;
use crate::types::DefinitionRef;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::ArgumentsError;
use crate::Context;
use crate::ResolutionInfo;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// The surface an execution pipeline coerces values through.
///
/// An engine owns the schema lookup, a [`CoercerBuilder`] (and so the cache
/// of built coercers), the default arguments coercion policy, and any
/// per-field policy overrides. It is immutable once requests are served and
/// may be shared across them.
pub struct CoercionEngine {
    arguments_coercer: Arc<dyn ArgumentsCoercer>,
    coercers: CoercerBuilder,
    field_arguments_coercers: HashMap<(String, String), Arc<dyn ArgumentsCoercer>>,
}
impl CoercionEngine {
    pub fn new(schema: Schema, config: &CoercionConfig) -> Self {
        Self::from_lookup(Arc::new(schema), config)
    }

    pub fn from_lookup(lookup: Arc<dyn SchemaLookup>, config: &CoercionConfig) -> Self {
        log::debug!(
            "Creating coercion engine with the `{}` arguments coercer.",
            config.arguments_coercer,
        );
        Self {
            arguments_coercer: config.arguments_coercer.to_arguments_coercer(),
            coercers: CoercerBuilder::new(lookup),
            field_arguments_coercers: HashMap::new(),
        }
    }

    /// The (cached) coercer for values of type `type_annotation`.
    pub fn coercer_for(
        &self,
        type_annotation: &TypeAnnotation,
        direction: Direction,
    ) -> Coercer {
        self.coercers.coercer_for(type_annotation, direction)
    }

    pub fn coercers(&self) -> &CoercerBuilder {
        &self.coercers
    }

    /// Finds the `type_name.field_name` output field on an object or
    /// interface type.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        match self.coercers.lookup().find_type(type_name)? {
            GraphQLType::Interface(iface_type) => iface_type.field(field_name),
            GraphQLType::Object(obj_type) => obj_type.field(field_name),
            _ => None,
        }
    }

    /// The `OnFieldExecution` directives annotated on `field`, woven into a
    /// chain the execution pipeline can run around the field's resolver.
    pub fn field_execution_directives(&self, field: &Field) -> Coercer {
        let bindings = get_directive_instances(
            field.directives(),
            self.coercers.lookup().as_ref(),
        );
        wrap_with_directives(&bindings, HookName::OnFieldExecution, None)
    }

    /// Coerces a raw client value (e.g. an operation variable) to
    /// `type_annotation`.
    pub async fn coerce_input_value(
        &self,
        type_annotation: &TypeAnnotation,
        value: Value,
        definition: DefinitionRef<'_>,
        context: &Context,
        info: &ResolutionInfo,
    ) -> CoercionResult {
        self.coercer_for(type_annotation, Direction::Input)
            .coerce(value, definition, context, info)
            .await
    }

    /// Coerces a resolver's return value for `field`.
    pub async fn coerce_output(
        &self,
        field: &Field,
        raw_value: Value,
        context: &Context,
        info: &ResolutionInfo,
    ) -> CoercionResult {
        self.coercer_for(field.type_annotation(), Direction::Output)
            .coerce(raw_value, DefinitionRef::Field(field), context, info)
            .await
    }

    /// Coerces the arguments passed to an occurrence of `field`, using the
    /// field's policy override if one was set and the engine-wide policy
    /// otherwise.
    pub async fn coerce_field_arguments(
        &self,
        field: &Field,
        occurrences: &IndexMap<String, Value>,
        context: &Context,
        info: &ResolutionInfo,
    ) -> Result<IndexMap<String, Value>, ArgumentsError> {
        let policy = self.field_arguments_coercers
            .get(&(field.parent_type_name().to_string(), field.name().to_string()))
            .unwrap_or(&self.arguments_coercer);
        coerce_arguments(
            field.parameters(),
            occurrences,
            &self.coercers,
            context,
            info,
            policy.as_ref(),
        ).await
    }

    /// Overrides the arguments coercion policy for `type_name.field_name`.
    pub fn set_field_arguments_coercer(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        policy: Arc<dyn ArgumentsCoercer>,
    ) {
        let type_name = type_name.into();
        let field_name = field_name.into();
        log::debug!("Overriding arguments coercer of `{type_name}.{field_name}`: {policy:?}");
        self.field_arguments_coercers.insert((type_name, field_name), policy);
    }
}
impl std::fmt::Debug for CoercionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoercionEngine")
            .field("arguments_coercer", &self.arguments_coercer)
            .field("coercers", &self.coercers)
            .field("field_arguments_coercers", &self.field_arguments_coercers)
            .finish()
    }
}
