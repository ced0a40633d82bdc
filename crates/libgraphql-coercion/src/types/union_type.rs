use crate::types::DirectiveAnnotation;
use indexmap::IndexSet;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: IndexSet<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            members: IndexSet::new(),
            name: name.into(),
        }
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn with_member(mut self, type_name: impl Into<String>) -> Self {
        self.members.insert(type_name.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
