use crate::scalars::ScalarCoercion;
use crate::types::DirectiveAnnotation;
use std::sync::Arc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) along
/// with the functions that coerce its values in each direction.
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) coercion: Arc<dyn ScalarCoercion>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn new(
        name: impl Into<String>,
        coercion: impl ScalarCoercion + 'static,
    ) -> Self {
        Self::from_arc(name, Arc::new(coercion))
    }

    pub fn from_arc(
        name: impl Into<String>,
        coercion: Arc<dyn ScalarCoercion>,
    ) -> Self {
        Self {
            coercion,
            description: None,
            directives: vec![],
            name: name.into(),
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

    /// The input and output coercion functions of this [`ScalarType`].
    pub fn coercion(&self) -> &Arc<dyn ScalarCoercion> {
        &self.coercion
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`ScalarType`],
    /// in the order they were declared.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("directives", &self.directives)
            .finish_non_exhaustive()
    }
}
