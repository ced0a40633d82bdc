/// The extension points a [`Directive`](crate::directives::Directive) may bind
/// a [`DirectiveHook`](crate::directives::DirectiveHook) to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookName {
    /// Runs on the coerced value of an argument or input field annotated
    /// with the directive.
    OnArgumentExecution,
    /// Available to the execution pipeline for wrapping the resolver of a
    /// field annotated with the directive.
    OnFieldExecution,
    /// Runs on raw client input, before a value of the annotated type is
    /// coerced.
    OnInputCoercion,
    /// Runs on resolver output, after a value of the annotated type has been
    /// coerced.
    OnOutputCoercion,
}
impl HookName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnArgumentExecution => "on_argument_execution",
            Self::OnFieldExecution => "on_field_execution",
            Self::OnInputCoercion => "on_input_coercion",
            Self::OnOutputCoercion => "on_output_coercion",
        }
    }
}
impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
