use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::InputField;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// The schema definition whose value is being coerced. Handed to every
/// coercion step and directive hook alongside the value itself.
#[derive(Clone, Copy, Debug)]
pub enum DefinitionRef<'a> {
    Field(&'a Field),
    InputField(&'a InputField),
    Parameter(&'a Parameter),
    /// An operation variable, identified by its name (without the `$`).
    Variable(&'a str),
}
impl<'a> DefinitionRef<'a> {
    /// The directives annotated on the definition. Variables carry none.
    pub fn directives(&self) -> &'a [DirectiveAnnotation] {
        match self {
            Self::Field(field) => field.directives().as_slice(),
            Self::InputField(field) => field.directives().as_slice(),
            Self::Parameter(param) => param.directives().as_slice(),
            Self::Variable(_) => &[],
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Field(field) => field.name(),
            Self::InputField(field) => field.name(),
            Self::Parameter(param) => param.name(),
            Self::Variable(name) => *name,
        }
    }

    /// A human-readable coordinate for error attribution (e.g.
    /// `Query.users(limit:)` or `$first`).
    pub fn schema_coordinate(&self) -> String {
        match self {
            Self::Field(field) => field.schema_coordinate(),
            Self::InputField(field) => field.schema_coordinate(),
            Self::Parameter(param) => param.schema_coordinate(),
            Self::Variable(name) => format!("${name}"),
        }
    }

    pub fn type_annotation(&self) -> Option<&'a TypeAnnotation> {
        match self {
            Self::Field(field) => Some(field.type_annotation()),
            Self::InputField(field) => Some(field.type_annotation()),
            Self::Parameter(param) => Some(param.type_annotation()),
            Self::Variable(_) => None,
        }
    }
}
