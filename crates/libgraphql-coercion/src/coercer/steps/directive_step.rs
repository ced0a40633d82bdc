use crate::coercer::Coercer;
use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Next;
use crate::directives::DirectiveArgs;
use crate::directives::DirectiveHook;
use crate::directives::HookName;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

/// One directive's hook, bound to that directive's arguments. The hook
/// receives the rest of the chain and decides whether to call it.
pub struct DirectiveStep {
    args: DirectiveArgs,
    directive_name: String,
    hook: Arc<dyn DirectiveHook>,
    hook_name: HookName,
}
impl DirectiveStep {
    pub fn new(
        directive_name: impl Into<String>,
        hook_name: HookName,
        hook: Arc<dyn DirectiveHook>,
        args: DirectiveArgs,
    ) -> Self {
        Self {
            args,
            directive_name: directive_name.into(),
            hook,
            hook_name,
        }
    }
}
impl CoercionStep for DirectiveStep {
    fn label(&self) -> String {
        format!("@{}:{}", self.directive_name, self.hook_name)
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        log::trace!(
            "Running `@{}` {} hook for `{}`.",
            self.directive_name,
            self.hook_name,
            scope.info.path,
        );
        self.hook.call(&self.args, value, scope, next)
    }
}

/// Runs the rest of the chain first and then feeds its result through a
/// chain of directive steps. Used for output directives, which post-process
/// already-coerced values.
pub struct PostCoercionDirectivesStep {
    directives: Coercer,
}
impl PostCoercionDirectivesStep {
    pub fn new(directives: Coercer) -> Self {
        Self { directives }
    }
}
impl CoercionStep for PostCoercionDirectivesStep {
    fn label(&self) -> String {
        format!("Then[{}]", self.directives.labels().join(", "))
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        async move {
            let coerced = next.run(value, scope).await?;
            self.directives.run(coerced, scope).await
        }.boxed()
    }
}
