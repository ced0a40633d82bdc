use crate::directives::HookName;

/// Which way a value is travelling through the engine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Client-supplied arguments, variables, and input object fields.
    Input,
    /// Resolver return values on their way back to the client.
    Output,
}
impl Direction {
    /// The directive hook that type-level directives bind to for this
    /// direction.
    pub fn type_hook(&self) -> HookName {
        match self {
            Self::Input => HookName::OnInputCoercion,
            Self::Output => HookName::OnOutputCoercion,
        }
    }
}
impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}
