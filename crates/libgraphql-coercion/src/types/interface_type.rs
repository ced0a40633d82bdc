use crate::types::DirectiveAnnotation;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl InterfaceType {
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

    pub fn with_field(mut self, mut field: Field) -> Self {
        field.set_parent_type_name(self.name.as_str());
        self.fields.insert(field.name.to_string(), field);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
