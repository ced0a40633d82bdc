use crate::directives::DirectiveArgs;
use crate::directives::DirectiveHook;
use crate::directives::HookName;
use crate::schema::SchemaLookup;
use crate::types::DirectiveAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// A directive annotation resolved against its definition: the hooks the
/// directive implements plus the arguments they are bound to.
///
/// Bindings are built for a single use (one field occurrence, one coercer)
/// and are not kept around.
#[derive(Clone)]
pub struct DirectiveBinding {
    pub(crate) args: DirectiveArgs,
    pub(crate) hooks: HashMap<HookName, Arc<dyn DirectiveHook>>,
    pub(crate) name: String,
}
impl DirectiveBinding {
    pub fn args(&self) -> &DirectiveArgs {
        &self.args
    }

    pub fn hook(&self, hook_name: HookName) -> Option<&Arc<dyn DirectiveHook>> {
        self.hooks.get(&hook_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replaces bound arguments with per-occurrence values (e.g. arguments
    /// passed to the same directive where a field is selected).
    pub fn with_overrides(mut self, overrides: &IndexMap<String, Value>) -> Self {
        for (arg_name, value) in overrides {
            self.args.insert(arg_name.to_string(), Some(value.clone()));
        }
        self
    }
}
impl std::fmt::Debug for DirectiveBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut hook_names = self.hooks.keys().collect::<Vec<_>>();
        hook_names.sort_by_key(|hook_name| hook_name.as_str());
        f.debug_struct("DirectiveBinding")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("hooks", &hook_names)
            .finish()
    }
}

/// Resolves `annotations` into [`DirectiveBinding`]s, preserving their order.
///
/// Each binding's arguments start from the directive's declared parameters:
/// an annotation argument wins over the parameter's default, and a parameter
/// with neither is bound as undefined. Annotations naming a directive the
/// schema does not define are skipped.
pub fn get_directive_instances<L: SchemaLookup + ?Sized>(
    annotations: &[DirectiveAnnotation],
    lookup: &L,
) -> Vec<DirectiveBinding> {
    let mut bindings = Vec::with_capacity(annotations.len());
    for annot in annotations {
        let Some(directive) = lookup.find_directive(annot.directive_name()) else {
            log::warn!(
                "Skipping annotation of undefined directive `@{}`.",
                annot.directive_name(),
            );
            continue;
        };

        let mut args = DirectiveArgs::default();
        for (param_name, param) in directive.parameters() {
            let value = annot.args()
                .get(param_name)
                .or(param.default_value())
                .cloned();
            args.insert(param_name.to_string(), value);
        }
        for arg_name in annot.args().keys() {
            if !directive.parameters().contains_key(arg_name) {
                log::warn!(
                    "Ignoring argument `{arg_name}` passed to `@{}`, which \
                    declares no such parameter.",
                    directive.name(),
                );
            }
        }

        bindings.push(DirectiveBinding {
            args,
            hooks: directive.hooks.clone(),
            name: directive.name().to_string(),
        });
    }
    bindings
}
