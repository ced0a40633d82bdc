use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn with_field(mut self, mut field: InputField) -> Self {
        field.parent_type_name = self.name.to_string();
        self.fields.insert(field.name.to_string(), field);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The input fields of this type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            directives: vec![],
            name: name.into(),
            parent_type_name: String::new(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`InputField`].
    ///
    /// This list of [`DirectiveAnnotation`]s is guaranteed to be ordered the
    /// same as the order of annotations specified on the [`InputField`]
    /// definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn schema_coordinate(&self) -> String {
        format!("{}.{}", self.parent_type_name, self.name)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
