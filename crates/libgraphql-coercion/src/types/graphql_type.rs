use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// A named type defined within a [`Schema`](crate::schema::Schema). Wrapping
/// types (lists and non-nulls) are expressed with
/// [`TypeAnnotation`](crate::types::TypeAnnotation) instead.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Enum(Box<EnumType>),
    InputObject(Box<InputObjectType>),
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(inputobj_type) = self {
            Some(inputobj_type)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    /// The list of [`DirectiveAnnotation`]s applied to the type definition, in
    /// declaration order.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        match self {
            Self::Enum(t) => t.directives(),
            Self::InputObject(t) => t.directives(),
            Self::Interface(t) => t.directives(),
            Self::Object(t) => t.directives(),
            Self::Scalar(t) => t.directives(),
            Self::Union(t) => t.directives(),
        }
    }

    /// Indicates if this type may be used as the type of an argument or an
    /// input field.
    pub fn is_input_type(&self) -> bool {
        self.kind().is_input()
    }

    /// Indicates if this type may be used as the type of an output field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(Box::new(value))
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(Box::new(value))
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(Box::new(value))
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(Box::new(value))
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(Box::new(value))
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(Box::new(value))
    }
}
