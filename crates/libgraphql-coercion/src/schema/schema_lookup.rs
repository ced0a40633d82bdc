use crate::coercer::Direction;
use crate::directives::get_directive_instances;
use crate::directives::Directive;
use crate::directives::DirectiveBinding;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ScalarType;

/// Read access to the named types and directives of a schema.
///
/// Coercers only ever consult a schema through this trait, so embedders may
/// back it with something other than a [`Schema`](crate::schema::Schema).
pub trait SchemaLookup: Send + Sync {
    fn find_directive(&self, name: &str) -> Option<&Directive>;

    fn find_type(&self, name: &str) -> Option<&GraphQLType>;

    fn find_enum(&self, name: &str) -> Option<&EnumType> {
        self.find_type(name).and_then(GraphQLType::as_enum)
    }

    fn find_input_object(&self, name: &str) -> Option<&InputObjectType> {
        self.find_type(name).and_then(GraphQLType::as_input_object)
    }

    fn find_scalar(&self, name: &str) -> Option<&ScalarType> {
        self.find_type(name).and_then(GraphQLType::as_scalar)
    }

    fn is_object(&self, name: &str) -> bool {
        matches!(self.find_type(name), Some(GraphQLType::Object(_)))
    }

    fn is_union(&self, name: &str) -> bool {
        matches!(self.find_type(name), Some(GraphQLType::Union(_)))
    }

    /// The directives annotated on the named type whose definitions
    /// implement the type-level hook for `direction`, in annotation order.
    fn type_directives(
        &self,
        type_name: &str,
        direction: Direction,
    ) -> Vec<DirectiveBinding> {
        let Some(graphql_type) = self.find_type(type_name) else {
            return vec![];
        };
        let hook_name = direction.type_hook();
        get_directive_instances(graphql_type.directives(), self)
            .into_iter()
            .filter(|binding| binding.hook(hook_name).is_some())
            .collect()
    }
}
