use crate::directives::DirectiveHook;
use crate::directives::HookName;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// A directive definition: its parameters and the hooks it implements.
#[derive(Clone)]
pub struct Directive {
    pub(crate) description: Option<String>,
    pub(crate) hooks: HashMap<HookName, Arc<dyn DirectiveHook>>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            hooks: HashMap::new(),
            name: name.into(),
            parameters: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hook(
        mut self,
        hook_name: HookName,
        hook: impl DirectiveHook + 'static,
    ) -> Self {
        self.hooks.insert(hook_name, Arc::new(hook));
        self
    }

    pub fn with_parameter(mut self, mut param: Parameter) -> Self {
        param.parent_field_name = format!("@{}", self.name);
        self.parameters.insert(param.name.to_string(), param);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn hook(&self, hook_name: HookName) -> Option<&Arc<dyn DirectiveHook>> {
        self.hooks.get(&hook_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parameters of this directive, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
impl std::fmt::Debug for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut hook_names = self.hooks.keys().collect::<Vec<_>>();
        hook_names.sort_by_key(|hook_name| hook_name.as_str());
        f.debug_struct("Directive")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("hooks", &hook_names)
            .finish()
    }
}

/// The directives every schema defines. They carry no coercion hooks.
pub(crate) fn builtin_directives() -> Vec<Directive> {
    vec![
        Directive::new("deprecated").with_parameter(
            Parameter::new("reason", TypeAnnotation::named("String", true))
                .with_default_value("No longer supported"),
        ),
        Directive::new("include").with_parameter(
            Parameter::new("if", TypeAnnotation::named("Boolean", false)),
        ),
        Directive::new("skip").with_parameter(
            Parameter::new("if", TypeAnnotation::named("Boolean", false)),
        ),
        Directive::new("specifiedBy").with_parameter(
            Parameter::new("url", TypeAnnotation::named("String", false)),
        ),
    ]
}
