use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Next;
use crate::types::GraphQLTypeKind;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::IndexMap;

pub const TYPENAME_FIELD: &str = "__typename";

/// The output step for object, interface, and union types (and the fallback
/// for names the schema cannot classify).
///
/// This step does not resolve sub-fields. It produces the skeleton the
/// execution pipeline fills with the object's own field results, carrying the
/// `__typename` discriminator that abstract-type resolution reads: plain
/// object types stamp their own name unless the raw value already names its
/// type, while abstract types only propagate a `__typename` the raw value
/// already carries.
pub struct CompositeOutputStep {
    kind: Option<GraphQLTypeKind>,
    type_name: String,
}
impl CompositeOutputStep {
    pub fn new(type_name: impl Into<String>, kind: Option<GraphQLTypeKind>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
        }
    }

    fn discriminator(&self, value: &Value) -> Option<String> {
        let carried = value.as_object()
            .and_then(|entries| entries.get(TYPENAME_FIELD))
            .and_then(Value::as_str)
            .map(str::to_string);
        match self.kind {
            Some(kind) if !kind.is_abstract() =>
                carried.or_else(|| Some(self.type_name.to_string())),
            _ => carried,
        }
    }
}
impl CoercionStep for CompositeOutputStep {
    fn label(&self) -> String {
        match self.kind {
            Some(kind) => format!("{}({})", kind.name(), self.type_name),
            None => format!("Unresolved({})", self.type_name),
        }
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        async move {
            if value.is_null() {
                return Ok(Value::Null);
            }
            let mut skeleton = IndexMap::new();
            if let Some(typename) = self.discriminator(&value) {
                skeleton.insert(TYPENAME_FIELD.to_string(), Value::String(typename));
            }
            next.run(Value::Object(skeleton), scope).await
        }.boxed()
    }
}
