use crate::coercer::Direction;
use crate::directives::Directive;
use crate::directives::DirectiveBinding;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ScalarType;
use inherent::inherent;
use std::collections::HashMap;

/// A validated set of named types and directive definitions that coercers
/// are built against.
///
/// Built-in scalars and directives are always present, unless a scalar of
/// the same name was registered to override the built-in one.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directive_defs: HashMap<String, Directive>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    pub fn all_directives(&self) -> &HashMap<String, Directive> {
        &self.directive_defs
    }

    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }
}

#[inherent]
impl SchemaLookup for Schema {
    pub fn find_directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn find_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumType>;
    pub fn find_input_object(&self, name: &str) -> Option<&InputObjectType>;
    pub fn find_scalar(&self, name: &str) -> Option<&ScalarType>;
    pub fn is_object(&self, name: &str) -> bool;
    pub fn is_union(&self, name: &str) -> bool;
    pub fn type_directives(
        &self,
        type_name: &str,
        direction: Direction,
    ) -> Vec<DirectiveBinding>;
}
