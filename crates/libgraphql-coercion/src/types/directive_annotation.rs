use crate::Value;
use indexmap::IndexMap;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a type, field, parameter, or input field.
///
/// A [`DirectiveAnnotation`] can be thought of as a "pointer" to some
/// [`Directive`](crate::directives::Directive) paired with a set of named
/// arguments ([`Value`]s).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) directive_name: String,
}
impl DirectiveAnnotation {
    pub fn new(directive_name: impl Into<String>) -> Self {
        Self {
            args: IndexMap::new(),
            directive_name: directive_name.into(),
        }
    }

    pub fn with_arg(
        mut self,
        arg_name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.args.insert(arg_name.into(), value.into());
        self
    }

    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the same
    /// ordering as the order of arguments passed to this directive annotation.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    /// The name of the [`Directive`](crate::directives::Directive) this
    /// annotation refers to.
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }
}
