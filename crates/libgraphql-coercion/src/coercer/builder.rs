use crate::coercer::Coercer;
use crate::coercer::CoercionStep;
use crate::coercer::Direction;
use crate::coercer::steps::CompositeOutputStep;
use crate::coercer::steps::EnumStep;
use crate::coercer::steps::InputObjectStep;
use crate::coercer::steps::ListStep;
use crate::coercer::steps::NonNullStep;
use crate::coercer::steps::PostCoercionDirectivesStep;
use crate::coercer::steps::ScalarStep;
use crate::directives::wrap_with_directives;
use crate::scalars::ScalarCoercion;
use crate::scalars::StringScalar;
use crate::scalars::STRING_SCALAR_NAME;
use crate::schema::SchemaLookup;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::Weak;

/// The shareable part of a coercer: everything determined by the reduced
/// (innermost named) type and the direction alone.
#[derive(Clone, Debug)]
struct NamedTypeCoercer {
    /// The coercion step for the named type itself.
    base: Coercer,
    /// Type-level directives, applied around the fully wrapped coercer.
    directives: Coercer,
}

/// Builds the [`Coercer`] for a field, argument, or input field of type
/// `type_annotation`.
///
/// The reduced type picks the base step, trying enum, then scalar, then
/// (input direction only) input object, and otherwise treating the type as
/// an object/interface/union. Each list and non-null layer of
/// `type_annotation` then wraps the base, outermost layer outermost. Finally
/// the reduced type's directives for `direction` wrap the whole chain: input
/// directives run before coercion, output directives after it.
pub fn build_coercer(
    type_annotation: &TypeAnnotation,
    lookup: &Arc<dyn SchemaLookup>,
    direction: Direction,
) -> Coercer {
    let type_name = type_annotation
        .innermost_named_type_annotation()
        .graphql_type_name();
    let named = build_named_type_coercer(type_name, lookup, direction, Weak::new());
    wrap_named_type_coercer(type_annotation, &named)
}

fn build_named_type_coercer(
    type_name: &str,
    lookup: &Arc<dyn SchemaLookup>,
    direction: Direction,
    cache: Weak<CoercerCache>,
) -> NamedTypeCoercer {
    let base = Coercer::from_steps(vec![
        build_base_step(type_name, lookup, direction, cache),
    ]);

    let bindings = lookup.type_directives(type_name, direction);
    let directives =
        if bindings.is_empty() {
            Coercer::identity()
        } else {
            let hook_chain = wrap_with_directives(
                &bindings,
                direction.type_hook(),
                None,
            );
            match direction {
                Direction::Input => hook_chain,
                Direction::Output => Coercer::from_step(
                    PostCoercionDirectivesStep::new(hook_chain),
                ),
            }
        };

    NamedTypeCoercer { base, directives }
}

fn build_base_step(
    type_name: &str,
    lookup: &Arc<dyn SchemaLookup>,
    direction: Direction,
    cache: Weak<CoercerCache>,
) -> Arc<dyn CoercionStep> {
    if let Some(enum_type) = lookup.find_enum(type_name) {
        let string_coercion = lookup.find_scalar(STRING_SCALAR_NAME)
            .map(|scalar| scalar.coercion().clone())
            .unwrap_or_else(|| Arc::new(StringScalar) as Arc<dyn ScalarCoercion>);
        return Arc::new(EnumStep::new(
            type_name,
            enum_type.values().keys().cloned().collect(),
            ScalarStep::new(STRING_SCALAR_NAME, string_coercion, direction),
        ));
    }

    if let Some(scalar_type) = lookup.find_scalar(type_name) {
        return Arc::new(ScalarStep::new(
            type_name,
            scalar_type.coercion().clone(),
            direction,
        ));
    }

    if direction == Direction::Input && lookup.find_input_object(type_name).is_some() {
        return Arc::new(InputObjectStep::new(
            type_name,
            lookup.clone(),
            cache,
        ));
    }

    let kind = lookup.find_type(type_name).map(GraphQLTypeKind::from);
    if kind.is_none() {
        log::debug!(
            "Type `{type_name}` is not defined in the schema; falling back to \
            object coercion.",
        );
    }
    Arc::new(CompositeOutputStep::new(type_name, kind))
}

fn push_wrapper_steps(
    type_annotation: &TypeAnnotation,
    steps: &mut Vec<Arc<dyn CoercionStep>>,
) {
    if !type_annotation.nullable() {
        steps.push(Arc::new(NonNullStep::new(type_annotation.to_string())));
    }
    if let TypeAnnotation::List(list_annot) = type_annotation {
        steps.push(Arc::new(ListStep));
        push_wrapper_steps(list_annot.inner_type_annotation(), steps);
    }
}

fn wrap_named_type_coercer(
    type_annotation: &TypeAnnotation,
    named: &NamedTypeCoercer,
) -> Coercer {
    let mut wrappers = vec![];
    push_wrapper_steps(type_annotation, &mut wrappers);
    named.directives
        .then(&Coercer::from_steps(wrappers))
        .then(&named.base)
}

/// Named-type coercers memoized per `(reduced type name, direction)`.
///
/// Input object steps hold a [`Weak`] reference back to the cache that owns
/// them and resolve their field coercers through it, so a self-referencing
/// input type is built once no matter how deeply a value nests it.
pub(crate) struct CoercerCache {
    entries: RwLock<HashMap<(String, Direction), NamedTypeCoercer>>,
    lookup: Arc<dyn SchemaLookup>,
}
impl CoercerCache {
    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn coercer_for(
        self: &Arc<Self>,
        type_annotation: &TypeAnnotation,
        direction: Direction,
    ) -> Coercer {
        let type_name = type_annotation
            .innermost_named_type_annotation()
            .graphql_type_name();
        let cache_key = (type_name.to_string(), direction);

        let cached = self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&cache_key)
            .cloned();
        let named = match cached {
            Some(named) => named,
            None => {
                log::debug!("Building {direction} coercer for type `{type_name}`.");
                let named = build_named_type_coercer(
                    type_name,
                    &self.lookup,
                    direction,
                    Arc::downgrade(self),
                );
                self.entries
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry(cache_key)
                    .or_insert(named)
                    .clone()
            },
        };

        wrap_named_type_coercer(type_annotation, &named)
    }
}

/// Builds coercers like [`build_coercer`], memoizing the named-type part per
/// `(reduced type name, direction)`.
///
/// Only the named-type part is cached: list and non-null layers are specific
/// to each field's annotation and are recomposed around the cached part on
/// every request, which is cheap (the steps themselves are shared). Input
/// object fields resolve their coercers through the same cache.
pub struct CoercerBuilder {
    cache: Arc<CoercerCache>,
}
impl CoercerBuilder {
    pub fn new(lookup: Arc<dyn SchemaLookup>) -> Self {
        Self {
            cache: Arc::new(CoercerCache {
                entries: RwLock::new(HashMap::new()),
                lookup,
            }),
        }
    }

    /// The number of `(type, direction)` pairs built so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn coercer_for(
        &self,
        type_annotation: &TypeAnnotation,
        direction: Direction,
    ) -> Coercer {
        self.cache.coercer_for(type_annotation, direction)
    }

    pub fn lookup(&self) -> &Arc<dyn SchemaLookup> {
        &self.cache.lookup
    }
}
impl std::fmt::Debug for CoercerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoercerBuilder")
            .field("cached_len", &self.cached_len())
            .finish_non_exhaustive()
    }
}
