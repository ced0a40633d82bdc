mod directive;
mod directive_binding;
mod directive_hook;
mod hook_name;
mod weaver;

pub(crate) use directive::builtin_directives;
pub use directive::Directive;
pub use directive_binding::get_directive_instances;
pub use directive_binding::DirectiveBinding;
pub use directive_hook::DirectiveArgs;
pub use directive_hook::DirectiveHook;
pub use hook_name::HookName;
pub use weaver::wrap_with_directives;

#[cfg(test)]
mod tests;
