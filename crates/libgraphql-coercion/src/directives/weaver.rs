use crate::coercer::Coercer;
use crate::coercer::CoercionStep;
use crate::coercer::steps::DirectiveStep;
use crate::directives::DirectiveBinding;
use crate::directives::HookName;
use std::sync::Arc;

/// Wraps `inner` (or the identity coercer) with the `hook_name` hook of each
/// binding that implements it.
///
/// The composition is right to left: the last binding becomes the innermost
/// wrapper around `inner` and the first binding the outermost, so the
/// first-declared directive runs first and decides whether anything after it
/// runs at all.
pub fn wrap_with_directives(
    bindings: &[DirectiveBinding],
    hook_name: HookName,
    inner: Option<&Coercer>,
) -> Coercer {
    let mut wrapped = inner.cloned().unwrap_or_else(Coercer::identity);
    for binding in bindings.iter().rev() {
        let Some(hook) = binding.hook(hook_name) else {
            continue;
        };
        let step: Arc<dyn CoercionStep> = Arc::new(DirectiveStep::new(
            binding.name(),
            hook_name,
            hook.clone(),
            binding.args().clone(),
        ));
        wrapped = Coercer::compose(step, &wrapped);
    }
    wrapped
}
