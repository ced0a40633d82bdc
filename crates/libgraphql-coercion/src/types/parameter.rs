use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;
use crate::Value;

/// An argument definition declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parent_field_name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            directives: vec![],
            name: name.into(),
            parent_field_name: String::new(),
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

    /// The value used when an occurrence of the owning field omits this
    /// argument. `None` means "no default", which is distinct from a default
    /// of `null` ([`Value::Null`]).
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_field_name(&self) -> &str {
        self.parent_field_name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The [schema coordinate](https://spec.graphql.org/draft/#sec-Schema-Coordinates)
    /// of this parameter (e.g. `Query.users(limit:)` or, for a directive
    /// parameter, `@deprecated(reason:)`).
    pub fn schema_coordinate(&self) -> String {
        if self.parent_type_name.is_empty() {
            return format!("{}({}:)", self.parent_field_name, self.name);
        }
        format!(
            "{}.{}({}:)",
            self.parent_type_name,
            self.parent_field_name,
            self.name,
        )
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
