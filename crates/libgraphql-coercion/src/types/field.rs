use crate::types::DirectiveAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// An output field defined on an [`ObjectType`](crate::types::ObjectType) or
/// an [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            description: None,
            directives: vec![],
            name: name.into(),
            parameters: IndexMap::new(),
            parent_type_name: String::new(),
            type_annotation,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn with_parameter(mut self, mut param: Parameter) -> Self {
        param.parent_field_name = self.name.to_string();
        param.parent_type_name = self.parent_type_name.to_string();
        self.parameters.insert(param.name.to_string(), param);
        self
    }

    pub(crate) fn set_parent_type_name(&mut self, type_name: &str) {
        self.parent_type_name = type_name.to_string();
        for param in self.parameters.values_mut() {
            param.parent_type_name = type_name.to_string();
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`Field`], in
    /// declaration order.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The argument definitions of this [`Field`], in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
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
